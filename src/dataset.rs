// src/dataset.rs
use crate::error::InstrumentApiError;
use crate::types::Instrument;
use log::info;
use std::fs;
use std::path::Path;

/// The instrument dataset, loaded once at startup and read-only afterwards.
///
/// Records keep their file order, so lookups report matches in the order the
/// dataset listed them.
#[derive(Debug)]
pub struct InstrumentTable {
    records: Vec<Instrument>,
}

impl InstrumentTable {
    /// Load the dataset from a JSON file containing an array of records.
    ///
    /// Any read or parse failure is returned to the caller; the binaries
    /// treat that as fatal rather than serving without data.
    pub fn load(path: &Path) -> Result<Self, InstrumentApiError> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<Instrument> = serde_json::from_str(&raw)?;
        info!("✅ Loaded {} instruments from {}", records.len(), path.display());
        Ok(Self { records })
    }

    pub fn from_records(records: Vec<Instrument>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-sensitive exact match on all three fields. No normalization, no
    /// partial matching. Duplicate rows in the dataset come back as-is.
    pub fn find(
        &self,
        trading_symbol: &str,
        segment: &str,
        instrument_type: &str,
    ) -> Vec<&Instrument> {
        self.records
            .iter()
            .filter(|record| {
                record.trading_symbol == trading_symbol
                    && record.segment == segment
                    && record.instrument_type == instrument_type
            })
            .collect()
    }
}
