// src/server.rs
use actix_web::{web, HttpResponse, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::dataset::InstrumentTable;
use crate::error::InstrumentApiError;

#[derive(Debug)]
pub struct AppState {
    pub config: ServiceConfig,
    pub session_id: Uuid,
    pub instruments: InstrumentTable,
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ServiceConfig, instruments: InstrumentTable) -> Self {
        Self {
            config,
            session_id: Uuid::new_v4(),
            instruments,
            start_time: Utc::now(),
        }
    }
}

fn default_segment() -> String {
    "NSE_EQ".to_string()
}

fn default_instrument_type() -> String {
    "EQ".to_string()
}

/// Query parameters for `GET /get_instrument`.
///
/// `trading_symbol` stays optional at the deserialization layer so a missing
/// parameter reaches the handler and produces the structured 400 body
/// instead of the framework's default extractor error.
#[derive(Debug, Deserialize)]
pub struct InstrumentQuery {
    pub trading_symbol: Option<String>,
    #[serde(default = "default_segment")]
    pub segment: String,
    #[serde(default = "default_instrument_type")]
    pub instrument_type: String,
}

/// GET /get_instrument - fetch instrument records by trading symbol.
///
/// Query Parameters:
/// - trading_symbol: Name of the stock (e.g. RELIANCE). Required.
/// - segment: Segment (default NSE_EQ).
/// - instrument_type: Instrument type (default EQ).
pub async fn get_instrument(
    query: web::Query<InstrumentQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, InstrumentApiError> {
    let query = query.into_inner();

    let trading_symbol = match query.trading_symbol.as_deref() {
        Some(symbol) if !symbol.is_empty() => symbol,
        _ => return Err(InstrumentApiError::MissingTradingSymbol),
    };

    let matches = state
        .instruments
        .find(trading_symbol, &query.segment, &query.instrument_type);

    if matches.is_empty() {
        return Err(InstrumentApiError::InstrumentNotFound(trading_symbol.to_string()));
    }

    Ok(HttpResponse::Ok().json(matches))
}

pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "session_id": state.session_id,
        "instrument_count": state.instruments.len(),
        "uptime_seconds": (Utc::now() - state.start_time).num_seconds(),
    })))
}
