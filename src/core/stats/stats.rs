// ============================================================================
// Arithmetic mean
// ============================================================================

/// Mean of `x`. An empty slice yields NaN.
pub fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

// ============================================================================
// Population variance (divisor n, not n-1)
// ============================================================================

pub fn population_variance(x: &[f64]) -> f64 {
    let xmean = mean(x);
    let mut sum = 0.0;
    for &v in x {
        let diff = v - xmean;
        sum += diff * diff;
    }
    sum / x.len() as f64
}

// ============================================================================
// Population standard deviation
// ============================================================================

pub fn population_std_dev(x: &[f64]) -> f64 {
    population_variance(x).sqrt()
}
