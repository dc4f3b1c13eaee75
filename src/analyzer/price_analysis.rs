use crate::analyzer::levels::{calculate_support_resistance, SupportResistanceResult};
use crate::analyzer::moving_average::{
    calculate_moving_averages, deviation_percent, moving_average_signals, MaSignal,
    MovingAveragesResult,
};
use crate::analyzer::percentile::{analyze_percentile, PercentileResult, PriceLevel, Recommendation};
use crate::analyzer::seasonal::{analyze_seasonal_patterns_at, SeasonalResult};
use crate::analyzer::summary::{summarize, PriceSummary};
use crate::analyzer::trend::{analyze_trend, TrendResult};
use crate::analyzer::volatility::{analyze_volatility, VolatilityResult};
use crate::analyzer::weekday::{analyze_day_of_week_patterns, best_and_worst_day, DayOfWeekResult};
use crate::analyzer::yoy::{compare_yoy, YoYResult};
use crate::model::PriceRecord;
use crate::normalizer::{prices, to_price_points, view_window};
use crate::utils::parse_report_date;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

/// Trait defining the interface for a price analyzer.
pub trait Analyzer {
    fn summarize(&self, records: &[PriceRecord]) -> PriceSummary;
    fn analyze(&self, input: &AnalysisInput<'_>) -> AnalysisReport;
}

/// Full retained history for one item plus the window being viewed.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub records: &'a [PriceRecord],
    pub view_start: NaiveDate,
    pub view_end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaDeviation {
    pub ma7: Option<f64>,
    pub ma30: Option<f64>,
    pub ma90: Option<f64>,
}

/// Every analysis for one item, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub view_start: NaiveDate,
    pub view_end: NaiveDate,
    pub summary: PriceSummary,
    pub current_price: f64,
    pub trend: TrendResult,
    pub volatility: VolatilityResult,
    pub percentile: PercentileResult,
    pub recommendation: Recommendation,
    pub price_level: PriceLevel,
    pub yoy: Option<YoYResult>,
    pub seasonal: Option<SeasonalResult>,
    pub support_resistance: Option<SupportResistanceResult>,
    pub moving_averages: MovingAveragesResult,
    pub ma_deviation: MaDeviation,
    pub signals: Vec<MaSignal>,
    pub day_of_week: Vec<DayOfWeekResult>,
    pub best_day: Option<DayOfWeekResult>,
    pub worst_day: Option<DayOfWeekResult>,
}

/// Implementation of the price analyzer.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerImpl {
    today: Option<NaiveDate>,
}

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self { today: None }
    }

    /// Pins the date used to pick the current seasonal month.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Analyzer for AnalyzerImpl {
    fn summarize(&self, records: &[PriceRecord]) -> PriceSummary {
        summarize(records)
    }

    /// View-window prices drive trend, volatility and moving averages;
    /// the full history drives percentile, seasonality, levels, weekdays and YoY.
    fn analyze(&self, input: &AnalysisInput<'_>) -> AnalysisReport {
        let history = to_price_points(input.records);
        let history_prices = prices(&history);
        let view_prices = prices(&view_window(&history, input.view_start, input.view_end));
        let current_price = view_prices.last().copied().unwrap_or(0.0);

        let view_records: Vec<PriceRecord> = input
            .records
            .iter()
            .filter(|r| {
                parse_report_date(&r.report_date)
                    .is_some_and(|d| d >= input.view_start && d <= input.view_end)
            })
            .cloned()
            .collect();

        debug!(
            "Analyzing {} history points, {} in view ({} .. {})",
            history.len(),
            view_prices.len(),
            input.view_start,
            input.view_end
        );

        let percentile = analyze_percentile(&history_prices, current_price);
        let moving_averages = calculate_moving_averages(&view_prices);
        let day_of_week = analyze_day_of_week_patterns(&history);
        let (best_day, worst_day) = match best_and_worst_day(&day_of_week) {
            Some((best, worst)) => (Some(best.clone()), Some(worst.clone())),
            None => (None, None),
        };

        AnalysisReport {
            view_start: input.view_start,
            view_end: input.view_end,
            summary: summarize(&view_records),
            current_price,
            trend: analyze_trend(&view_prices),
            volatility: analyze_volatility(&view_prices),
            recommendation: Recommendation::from_percentile(percentile.current_percentile),
            price_level: PriceLevel::from_percentile(percentile.current_percentile),
            percentile,
            yoy: compare_yoy(&history, input.view_start, input.view_end),
            seasonal: analyze_seasonal_patterns_at(&history, self.today()),
            support_resistance: calculate_support_resistance(&history_prices),
            ma_deviation: MaDeviation {
                ma7: deviation_percent(current_price, moving_averages.ma7),
                ma30: deviation_percent(current_price, moving_averages.ma30),
                ma90: deviation_percent(current_price, moving_averages.ma90),
            },
            signals: moving_average_signals(current_price, &moving_averages),
            moving_averages,
            day_of_week,
            best_day,
            worst_day,
        }
    }
}
