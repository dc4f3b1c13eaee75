// Core structs: PriceRecord, PricePoint, dataset manifest, errors
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of a section's `prices.json`, as written by the data fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    pub report_date: String,
    #[serde(default)]
    pub item_description: String,
    #[serde(default)]
    pub number_trades: f64,
    #[serde(default)]
    pub total_pounds: f64,
    #[serde(default)]
    pub price_range_low: f64,
    #[serde(default)]
    pub price_range_high: f64,
    #[serde(default)]
    pub weighted_average: f64,
}

/// A dated weighted-average price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataManifest {
    pub generated_at: String,
    pub data_start_date: String,
    pub data_end_date: String,
    pub reports: Vec<ManifestReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestReport {
    pub slug_id: u64,
    pub slug_name: String,
    pub report_title: String,
    #[serde(default)]
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub slug_id: String,
    pub slug_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
