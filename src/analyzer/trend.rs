//! Trend: regression slope direction plus net percent move over a window.

use crate::analyzer::stats::{linear_slope, mean};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub direction: TrendDirection,
    pub change_percent: f64,
    pub slope: f64,
}

/// Slope must exceed 0.1% of the mean price to count as a move.
const SLOPE_THRESHOLD_RATIO: f64 = 0.001;

/// Analyze prices in chronological order (oldest first).
///
/// `direction` follows the regression slope, `change_percent` the first/last
/// delta, so a window that spikes and returns can be `Flat` with a nonzero change.
pub fn analyze_trend(prices: &[f64]) -> TrendResult {
    if prices.len() < 2 {
        return TrendResult {
            direction: TrendDirection::Flat,
            change_percent: 0.0,
            slope: 0.0,
        };
    }

    let slope = linear_slope(prices);

    let first = prices[0];
    let last = prices[prices.len() - 1];
    let change_percent = if first != 0.0 {
        (last - first) / first * 100.0
    } else {
        0.0
    };

    let threshold = mean(prices) * SLOPE_THRESHOLD_RATIO;
    let direction = if slope > threshold {
        TrendDirection::Up
    } else if slope < -threshold {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };

    TrendResult {
        direction,
        change_percent,
        slope,
    }
}
