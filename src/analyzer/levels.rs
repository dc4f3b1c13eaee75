//! Support and resistance bands from the tails of the price distribution.

use serde::Serialize;

pub const MIN_LEVEL_POINTS: usize = 10;

/// Current price within 5% of a band counts as "near" it.
const NEAR_BAND_RATIO: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResistanceResult {
    pub support: f64,
    pub resistance: f64,
    pub current_price: f64,
    pub near_support: bool,
    pub near_resistance: bool,
}

/// `prices` must be chronological: the last element is the current price.
/// Support is the 10th-percentile value, resistance the 90th.
pub fn calculate_support_resistance(prices: &[f64]) -> Option<SupportResistanceResult> {
    if prices.len() < MIN_LEVEL_POINTS {
        return None;
    }

    let current_price = *prices.last()?;
    let mut sorted = prices.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let support = sorted[(n as f64 * 0.1).floor() as usize];
    let resistance = sorted[((n as f64 * 0.9).floor() as usize).min(n - 1)];

    Some(SupportResistanceResult {
        support,
        resistance,
        current_price,
        near_support: current_price <= support * (1.0 + NEAR_BAND_RATIO),
        near_resistance: current_price >= resistance * (1.0 - NEAR_BAND_RATIO),
    })
}
