//! Behavioral properties of the analysis functions over realistic series.

use beefwatch::analyzer::stats::calculate_sma;
use beefwatch::analyzer::{
    analyze_day_of_week_patterns, analyze_percentile, analyze_seasonal_patterns_at, analyze_trend,
    analyze_volatility, calculate_moving_averages, calculate_support_resistance, compare_yoy,
    TrendDirection, VolatilityLevel,
};
use beefwatch::PricePoint;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// `n` daily prices rising linearly from `from` to `to`, starting at `start`.
fn linear_history(start: NaiveDate, n: usize, from: f64, to: f64) -> Vec<PricePoint> {
    (0..n)
        .map(|i| {
            let price = from + (to - from) * i as f64 / (n - 1) as f64;
            PricePoint::new(start + Duration::days(i as i64), price)
        })
        .collect()
}

fn random_prices(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(150.0..350.0)).collect()
}

// ---------------------------------------------------------------------------
// Moving averages
// ---------------------------------------------------------------------------

#[test]
fn sma_of_one_is_last_price() {
    for seed in 0..20 {
        let prices = random_prices(seed, 1 + seed as usize);
        assert_eq!(calculate_sma(&prices, 1), prices.last().copied());
    }
}

#[test]
fn sma_is_none_exactly_when_short() {
    let prices = random_prices(3, 40);
    for period in 1..=60 {
        assert_eq!(calculate_sma(&prices, period).is_none(), prices.len() < period);
    }
}

#[test]
fn moving_averages_echo_input() {
    let prices = random_prices(11, 95);
    let ma = calculate_moving_averages(&prices);
    assert_eq!(ma.prices, prices);
    assert!(ma.ma7.is_some() && ma.ma30.is_some() && ma.ma90.is_some());
}

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn degenerate_inputs_yield_sentinels() {
    for prices in [vec![], vec![245.0]] {
        let v = analyze_volatility(&prices);
        assert_eq!((v.standard_deviation, v.coefficient_of_variation), (0.0, 0.0));
        assert_eq!(v.level, VolatilityLevel::Low);
    }

    let p = analyze_percentile(&[], 245.0);
    assert_eq!(p.current_percentile, 50.0);
    assert_eq!(p.interpretation, "No data available");

    assert!(calculate_support_resistance(&random_prices(5, 9)).is_none());
    assert!(analyze_day_of_week_patterns(&[]).is_empty());
    assert!(compare_yoy(&[], d(2024, 1, 1), d(2024, 1, 31)).is_none());

    let short = linear_history(d(2024, 1, 1), 29, 200.0, 210.0);
    assert!(analyze_seasonal_patterns_at(&short, d(2024, 1, 15)).is_none());
}

#[test]
fn documented_examples() {
    assert_eq!(analyze_percentile(&[10.0, 20.0, 30.0, 40.0, 50.0], 30.0).current_percentile, 40.0);

    let flat = analyze_trend(&[100.0, 100.0, 100.0]);
    assert_eq!((flat.direction, flat.change_percent, flat.slope), (TrendDirection::Flat, 0.0, 0.0));

    let up = analyze_trend(&[100.0, 110.0, 120.0]);
    assert_eq!(up.direction, TrendDirection::Up);
    assert!((up.change_percent - 20.0).abs() < 1e-9);

    let levels: Vec<f64> = (1..=10).map(f64::from).collect();
    let sr = calculate_support_resistance(&levels).unwrap();
    assert_eq!((sr.support, sr.resistance), (2.0, 10.0));
}

// ---------------------------------------------------------------------------
// Scenario: two years of steadily rising prices
// ---------------------------------------------------------------------------

#[test]
fn rising_history_scenario() {
    let history = linear_history(d(2023, 1, 1), 400, 180.0, 220.0);
    let all_prices: Vec<f64> = history.iter().map(|p| p.price).collect();
    let view = &all_prices[all_prices.len() - 30..];

    let trend = analyze_trend(view);
    assert!(trend.slope > 0.0);
    assert!(trend.change_percent > 1.0 && trend.change_percent < 3.0);

    let current = *view.last().unwrap();
    let p = analyze_percentile(&all_prices, current);
    assert!(p.current_percentile >= 95.0 && p.current_percentile <= 100.0);
    assert_eq!(p.interpretation, "Near historical highs - premium pricing");

    let sr = calculate_support_resistance(&all_prices).unwrap();
    assert!(sr.support < sr.resistance);
    assert!(sr.near_resistance);
    assert!(!sr.near_support);

    let view_end = history.last().unwrap().date;
    let view_start = view_end - Duration::days(29);
    let yoy = compare_yoy(&history, view_start, view_end).unwrap();
    assert_eq!(yoy.data_points.current, 30);
    assert_eq!(yoy.data_points.last_year, 30);
    assert!(yoy.change_percent > 0.0);

    let seasonal = analyze_seasonal_patterns_at(&history, d(2024, 2, 1)).unwrap();
    assert!(seasonal.monthly_averages.iter().all(|m| m.count > 0));
    assert_eq!(seasonal.monthly_averages.len(), 12);

    let days = analyze_day_of_week_patterns(&history);
    assert_eq!(days.len(), 7);
    assert_eq!(days.iter().map(|d| d.count).sum::<usize>(), 400);
}

#[test]
fn steep_view_window_trends_up() {
    // 1% of price per report clears the 0.1%-of-mean threshold
    let view: Vec<f64> = (0..30).map(|i| 200.0 * (1.0 + 0.01 * i as f64)).collect();
    let trend = analyze_trend(&view);
    assert_eq!(trend.direction, TrendDirection::Up);
    assert!((trend.change_percent - 29.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Purity
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_are_identical() {
    for seed in 0..10 {
        let prices = random_prices(seed, 120);
        let points: Vec<PricePoint> = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PricePoint::new(d(2023, 1, 1) + Duration::days(i as i64 * 3), p))
            .collect();
        let today = d(2024, 3, 1);

        assert_eq!(analyze_trend(&prices), analyze_trend(&prices));
        assert_eq!(analyze_volatility(&prices), analyze_volatility(&prices));
        assert_eq!(analyze_percentile(&prices, prices[7]), analyze_percentile(&prices, prices[7]));
        assert_eq!(calculate_moving_averages(&prices), calculate_moving_averages(&prices));
        assert_eq!(calculate_support_resistance(&prices), calculate_support_resistance(&prices));
        assert_eq!(
            analyze_seasonal_patterns_at(&points, today),
            analyze_seasonal_patterns_at(&points, today)
        );
        assert_eq!(analyze_day_of_week_patterns(&points), analyze_day_of_week_patterns(&points));
        assert_eq!(
            compare_yoy(&points, d(2023, 11, 1), d(2023, 12, 31)),
            compare_yoy(&points, d(2023, 11, 1), d(2023, 12, 31))
        );
    }
}

#[test]
fn random_series_stay_in_range() {
    for seed in 100..120 {
        let prices = random_prices(seed, 200);
        let v = analyze_volatility(&prices);
        assert!(v.standard_deviation >= 0.0 && v.coefficient_of_variation >= 0.0);

        let p = analyze_percentile(&prices, prices[0]);
        assert!((0.0..=100.0).contains(&p.current_percentile));

        let sr = calculate_support_resistance(&prices).unwrap();
        assert!(sr.support <= sr.resistance);
    }
}
