//! Small summary-statistic helpers shared by the elasticity summaries and
//! the density bandwidth rule. Callers guard against empty samples; on an
//! empty slice these return NaN rather than panicking.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// sample standard deviation (n - 1 denominator); 0.0 for a single value.
pub fn std_dev(values: &[f64]) -> f64 {
    match values.len() {
        0 => f64::NAN,
        1 => 0.0,
        n => {
            let m = mean(values);
            let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
            (ss / (n - 1) as f64).sqrt()
        }
    }
}

/// linearly interpolated quantile (R type 7). `q` is clamped to [0, 1].
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let q = q.clamp(0.0, 1.0);
    let position = q * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    if below == above {
        return sorted[below];
    }
    let weight = position - below as f64;
    sorted[below] * (1.0 - weight) + sorted[above] * weight
}
