//! Where the current price sits in the historical distribution.

use crate::analyzer::stats::percentile_rank;
use serde::{Deserialize, Serialize};

pub const NO_DATA_MESSAGE: &str = "No data available";

/// Returned for an empty history; not a computed rank.
pub const NEUTRAL_PERCENTILE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentileResult {
    pub current_percentile: f64,
    pub interpretation: String,
}

/// Interpretation tiers, upper bounds inclusive.
pub fn interpretation(percentile: f64) -> &'static str {
    if percentile <= 20.0 {
        "Excellent buying opportunity - prices are near historical lows"
    } else if percentile <= 40.0 {
        "Good value - prices are below average"
    } else if percentile <= 60.0 {
        "Fair price - near historical average"
    } else if percentile <= 80.0 {
        "Above average - consider timing"
    } else {
        "Near historical highs - premium pricing"
    }
}

pub fn analyze_percentile(historical_prices: &[f64], current_price: f64) -> PercentileResult {
    if historical_prices.is_empty() {
        return PercentileResult {
            current_percentile: NEUTRAL_PERCENTILE,
            interpretation: NO_DATA_MESSAGE.to_string(),
        };
    }

    let current_percentile = percentile_rank(historical_prices, current_price);
    PercentileResult {
        current_percentile,
        interpretation: interpretation(current_percentile).to_string(),
    }
}

/// Buying recommendation derived from the percentile tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Wait,
    Caution,
}

impl Recommendation {
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile <= 20.0 {
            Recommendation::StrongBuy
        } else if percentile <= 40.0 {
            Recommendation::Buy
        } else if percentile <= 60.0 {
            Recommendation::Hold
        } else if percentile <= 80.0 {
            Recommendation::Wait
        } else {
            Recommendation::Caution
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Strong Buy",
            Recommendation::Buy => "Buy - Good Value",
            Recommendation::Hold => "Hold - Fair Price",
            Recommendation::Wait => "Wait",
            Recommendation::Caution => "Caution - Near Highs",
        }
    }
}

/// Coarse price level used in the market-conditions summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceLevel {
    Low,
    Average,
    High,
}

impl PriceLevel {
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile <= 30.0 {
            PriceLevel::Low
        } else if percentile >= 70.0 {
            PriceLevel::High
        } else {
            PriceLevel::Average
        }
    }
}
