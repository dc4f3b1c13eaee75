//! Year-over-year comparison of a view window against the same window a year earlier.

use crate::analyzer::stats::mean;
use crate::model::PricePoint;
use crate::utils::one_year_earlier;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YoYDataPoints {
    pub current: usize,
    pub last_year: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YoYResult {
    pub current_avg: f64,
    pub last_year_avg: f64,
    pub change_percent: f64,
    pub data_points: YoYDataPoints,
}

fn prices_between(points: &[PricePoint], start: NaiveDate, end: NaiveDate) -> Vec<f64> {
    points
        .iter()
        .filter(|p| p.date >= start && p.date <= end)
        .map(|p| p.price)
        .collect()
}

/// Both windows are inclusive. `None` when either window has no prices.
pub fn compare_yoy(
    points: &[PricePoint],
    view_start: NaiveDate,
    view_end: NaiveDate,
) -> Option<YoYResult> {
    let current = prices_between(points, view_start, view_end);
    let last_year = prices_between(
        points,
        one_year_earlier(view_start),
        one_year_earlier(view_end),
    );

    if current.is_empty() || last_year.is_empty() {
        return None;
    }

    let current_avg = mean(&current);
    let last_year_avg = mean(&last_year);
    let change_percent = if last_year_avg != 0.0 {
        (current_avg - last_year_avg) / last_year_avg * 100.0
    } else {
        0.0
    };

    Some(YoYResult {
        current_avg,
        last_year_avg,
        change_percent,
        data_points: YoYDataPoints {
            current: current.len(),
            last_year: last_year.len(),
        },
    })
}
