// src/types.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of the instrument dataset.
///
/// The dataset carries more columns than the three we filter on
/// (instrument_key, name, isin, lot sizes and so on); everything beyond the
/// filter fields lands in `extra` and is echoed back verbatim in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub trading_symbol: String,
    pub segment: String,
    pub instrument_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
