use crate::analyzer::stats::{coefficient_of_variation, std_dev};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityLevel {
    Low,
    Moderate,
    High,
}

impl VolatilityLevel {
    /// CV below 5% is low, below 15% moderate, anything else high.
    pub fn from_cv(cv: f64) -> Self {
        if cv < 5.0 {
            VolatilityLevel::Low
        } else if cv < 15.0 {
            VolatilityLevel::Moderate
        } else {
            VolatilityLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VolatilityLevel::Low => "Low",
            VolatilityLevel::Moderate => "Moderate",
            VolatilityLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolatilityResult {
    pub standard_deviation: f64,
    pub coefficient_of_variation: f64,
    pub level: VolatilityLevel,
}

pub fn analyze_volatility(prices: &[f64]) -> VolatilityResult {
    if prices.len() < 2 {
        return VolatilityResult {
            standard_deviation: 0.0,
            coefficient_of_variation: 0.0,
            level: VolatilityLevel::Low,
        };
    }

    let cv = coefficient_of_variation(prices);
    VolatilityResult {
        standard_deviation: std_dev(prices),
        coefficient_of_variation: cv,
        level: VolatilityLevel::from_cv(cv),
    }
}
