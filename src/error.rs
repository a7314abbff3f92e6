// src/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstrumentApiError {
    #[error("trading_symbol is required")]
    MissingTradingSymbol,

    #[error("No instrument found for {0}")]
    InstrumentNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResponseError for InstrumentApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            InstrumentApiError::MissingTradingSymbol => StatusCode::BAD_REQUEST,
            InstrumentApiError::InstrumentNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
