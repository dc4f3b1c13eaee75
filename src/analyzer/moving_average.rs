use crate::analyzer::stats::calculate_sma;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovingAveragesResult {
    pub ma7: Option<f64>,
    pub ma30: Option<f64>,
    pub ma90: Option<f64>,
    pub prices: Vec<f64>,
}

/// 7, 30 and 90 period SMAs. Periods count observations, not calendar days.
pub fn calculate_moving_averages(prices: &[f64]) -> MovingAveragesResult {
    MovingAveragesResult {
        ma7: calculate_sma(prices, 7),
        ma30: calculate_sma(prices, 30),
        ma90: calculate_sma(prices, 90),
        prices: prices.to_vec(),
    }
}

/// Percent distance of `current` from a moving average.
pub fn deviation_percent(current: f64, ma: Option<f64>) -> Option<f64> {
    match ma {
        Some(avg) if avg != 0.0 => Some((current - avg) / avg * 100.0),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    Rising,
    Falling,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaSignal {
    pub direction: SignalDirection,
    pub description: String,
}

fn signal(lhs: f64, rhs: f64, subject: &str, reference: &str) -> MaSignal {
    let above = lhs > rhs;
    MaSignal {
        direction: if above { SignalDirection::Rising } else { SignalDirection::Falling },
        description: format!("{} {} {}", subject, if above { "above" } else { "below" }, reference),
    }
}

/// Crossover signals between the current price and the moving averages.
pub fn moving_average_signals(current: f64, ma: &MovingAveragesResult) -> Vec<MaSignal> {
    let mut signals = Vec::new();
    if let (Some(ma7), Some(ma30)) = (ma.ma7, ma.ma30) {
        signals.push(signal(current, ma7, "Price", "7-day MA"));
        signals.push(signal(ma7, ma30, "7-day MA", "30-day MA"));
    }
    if let (Some(ma30), Some(ma90)) = (ma.ma30, ma.ma90) {
        signals.push(signal(ma30, ma90, "30-day MA", "90-day MA"));
    }
    signals
}
