use crate::analyzer::stats::mean;
use crate::model::PricePoint;
use chrono::Datelike;
use serde::Serialize;

pub const DAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOfWeekResult {
    pub day: &'static str,
    pub avg: f64,
    pub count: usize,
}

/// Average price per weekday, Sunday first. Weekdays without observations are omitted.
pub fn analyze_day_of_week_patterns(points: &[PricePoint]) -> Vec<DayOfWeekResult> {
    let mut buckets: [Vec<f64>; 7] = Default::default();
    for p in points {
        buckets[p.date.weekday().num_days_from_sunday() as usize].push(p.price);
    }

    buckets
        .iter()
        .enumerate()
        .filter(|(_, prices)| !prices.is_empty())
        .map(|(idx, prices)| DayOfWeekResult {
            day: DAY_NAMES[idx],
            avg: mean(prices),
            count: prices.len(),
        })
        .collect()
}

/// Cheapest and most expensive weekday, in that order.
pub fn best_and_worst_day(
    days: &[DayOfWeekResult],
) -> Option<(&DayOfWeekResult, &DayOfWeekResult)> {
    let mut ranked: Vec<&DayOfWeekResult> = days.iter().collect();
    ranked.sort_by(|a, b| a.avg.total_cmp(&b.avg));
    Some((*ranked.first()?, *ranked.last()?))
}
