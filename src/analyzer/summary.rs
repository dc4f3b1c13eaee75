use crate::analyzer::stats::{mean, median};
use crate::model::PriceRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Headline statistics for a set of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub mode: f64,
    pub count: usize,
    pub total_pounds: f64,
}

/// Price figures cover only records with a positive weighted average;
/// `total_pounds` sums every record.
pub fn summarize(records: &[PriceRecord]) -> PriceSummary {
    let prices: Vec<f64> = records
        .iter()
        .map(|r| r.weighted_average)
        .filter(|&p| p > 0.0)
        .collect();

    let (min, max) = if prices.is_empty() {
        (0.0, 0.0)
    } else {
        (
            prices.iter().copied().fold(f64::INFINITY, f64::min),
            prices.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        )
    };

    PriceSummary {
        mean: mean(&prices),
        median: median(&prices),
        min,
        max,
        mode: mode(&prices),
        count: prices.len(),
        total_pounds: records.iter().map(|r| r.total_pounds).sum(),
    }
}

/// Most frequent price, compared at cent precision. The first price to
/// reach the top count wins; `0.0` for an empty slice.
pub fn mode(prices: &[f64]) -> f64 {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut best = 0.0;
    let mut best_count = 0;
    for &price in prices {
        let count = counts.entry(format!("{:.2}", price)).or_insert(0);
        *count += 1;
        if *count > best_count {
            best_count = *count;
            best = price;
        }
    }
    best
}
