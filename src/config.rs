// src/config.rs
use anyhow::Result;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub port: u16,
    pub dataset_path: PathBuf,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000);
        let dataset_path = env::var("DATASET_PATH")
            .unwrap_or_else(|_| "data/NSE.json".to_string())
            .into();
        Ok(Self { port, dataset_path })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
