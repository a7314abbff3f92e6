// src/lib.rs
pub mod config;
pub mod dataset;
pub mod error;
pub mod server;
pub mod types;

// Optional re-exports
pub use config::ServiceConfig;
pub use dataset::InstrumentTable;
pub use error::InstrumentApiError;
pub use server::{get_instrument, health_check, AppState, InstrumentQuery};
pub use types::Instrument;
