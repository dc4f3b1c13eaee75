//! Month-of-year averages across all years of history.

use crate::analyzer::stats::mean;
use crate::model::PricePoint;
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Fewer observations than this yields no seasonal result.
pub const MIN_SEASONAL_POINTS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAverage {
    pub month: &'static str,
    pub avg: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalResult {
    pub best_month: &'static str,
    pub worst_month: &'static str,
    pub current_month_avg: f64,
    pub monthly_averages: Vec<MonthlyAverage>,
}

/// Seasonal pattern relative to the local calendar month.
pub fn analyze_seasonal_patterns(points: &[PricePoint]) -> Option<SeasonalResult> {
    analyze_seasonal_patterns_at(points, Local::now().date_naive())
}

/// Seasonal pattern with `today` deciding which month is "current".
pub fn analyze_seasonal_patterns_at(
    points: &[PricePoint],
    today: NaiveDate,
) -> Option<SeasonalResult> {
    if points.len() < MIN_SEASONAL_POINTS {
        return None;
    }

    let mut buckets: [Vec<f64>; 12] = Default::default();
    for p in points {
        buckets[p.date.month0() as usize].push(p.price);
    }

    let monthly_averages: Vec<MonthlyAverage> = buckets
        .iter()
        .enumerate()
        .filter(|(_, prices)| !prices.is_empty())
        .map(|(idx, prices)| MonthlyAverage {
            month: MONTH_NAMES[idx],
            avg: mean(prices),
            count: prices.len(),
        })
        .collect();

    // Stable sort: equal averages keep calendar order.
    let mut ranked: Vec<&MonthlyAverage> = monthly_averages.iter().collect();
    ranked.sort_by(|a, b| a.avg.total_cmp(&b.avg));
    let best_month = ranked.first()?.month;
    let worst_month = ranked.last()?.month;

    let current_name = MONTH_NAMES[today.month0() as usize];
    let current_month_avg = monthly_averages
        .iter()
        .find(|m| m.month == current_name)
        .map(|m| m.avg)
        .unwrap_or(0.0);

    Some(SeasonalResult {
        best_month,
        worst_month,
        current_month_avg,
        monthly_averages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// Ten points in each of the given months, priced at `base + month`.
    fn months(months: &[u32], base: f64) -> Vec<PricePoint> {
        months
            .iter()
            .flat_map(|&m| {
                (1..=10).map(move |day| PricePoint::new(d(2024, m, day), base + m as f64))
            })
            .collect()
    }

    #[test]
    fn too_few_points_is_none() {
        let points: Vec<PricePoint> = (1..=29)
            .map(|day| PricePoint::new(d(2024, 1, day), 200.0))
            .collect();
        assert!(analyze_seasonal_patterns_at(&points, d(2024, 1, 31)).is_none());
    }

    #[test]
    fn buckets_by_month_and_skips_empty() {
        let points = months(&[1, 4, 9], 200.0);
        let s = analyze_seasonal_patterns_at(&points, d(2024, 4, 20)).unwrap();
        let names: Vec<&str> = s.monthly_averages.iter().map(|m| m.month).collect();
        assert_eq!(names, vec!["January", "April", "September"]);
        assert!(s.monthly_averages.iter().all(|m| m.count == 10));
        assert_eq!(s.best_month, "January");
        assert_eq!(s.worst_month, "September");
        assert_eq!(s.current_month_avg, 204.0);
    }

    #[test]
    fn aggregates_across_years() {
        let mut points = months(&[3], 100.0);
        points.extend((1..=20).map(|day| PricePoint::new(d(2023, 3, day), 203.5)));
        let s = analyze_seasonal_patterns_at(&points, d(2024, 3, 1)).unwrap();
        assert_eq!(s.monthly_averages.len(), 1);
        assert_eq!(s.monthly_averages[0].count, 30);
        assert!((s.monthly_averages[0].avg - 170.0).abs() < 1e-9);
    }

    #[test]
    fn current_month_without_data_is_zero() {
        let points = months(&[1, 2, 3], 200.0);
        let s = analyze_seasonal_patterns_at(&points, d(2024, 12, 1)).unwrap();
        assert_eq!(s.current_month_avg, 0.0);
    }

    #[test]
    fn ties_keep_calendar_order() {
        let points: Vec<PricePoint> = [2, 5, 8]
            .iter()
            .flat_map(|&m| (1..=10).map(move |day| PricePoint::new(d(2024, m, day), 250.0)))
            .collect();
        let s = analyze_seasonal_patterns_at(&points, d(2024, 1, 1)).unwrap();
        assert_eq!(s.best_month, "February");
        assert_eq!(s.worst_month, "August");
    }
}
