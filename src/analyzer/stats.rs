//! Shared statistics over price slices.

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Simple moving average over the last `period` prices.
/// Returns `None` for a zero period or when fewer than `period` prices are
/// available.
pub fn calculate_sma(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }
    let window = &prices[prices.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Population standard deviation (divides by N).
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Standard deviation as a percentage of the mean; `0.0` when the mean is zero.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let avg = mean(values);
    if avg == 0.0 {
        return 0.0;
    }
    std_dev(values) / avg * 100.0
}

/// Share of `reference` strictly below `value`, in percent.
/// Ties are not counted, so a value equal to every element ranks 0.
pub fn percentile_rank(reference: &[f64], value: f64) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }
    let below = reference.iter().filter(|&&p| p < value).count();
    below as f64 / reference.len() as f64 * 100.0
}

/// Least-squares slope of `prices` against their index.
pub fn linear_slope(prices: &[f64]) -> f64 {
    let n = prices.len();
    if n < 2 {
        return 0.0;
    }
    let x_mean = (n as f64 - 1.0) / 2.0;
    let y_mean = mean(prices);
    let mut num = 0.0;
    let mut den = 0.0;
    for (i, &y) in prices.iter().enumerate() {
        let dx = i as f64 - x_mean;
        num += dx * (y - y_mean);
        den += dx * dx;
    }
    if den == 0.0 {
        return 0.0;
    }
    num / den
}

/// Median; even-length input averages the two middle values.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
