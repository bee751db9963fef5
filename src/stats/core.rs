// src/stats/core.rs

/// Simple returns: `r[i] = x[i+1] / x[i] - 1`
///
/// Output has one element fewer than the input; empty for fewer than two prices.
#[inline]
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

#[inline]
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / (data.len() as f64)
}

/// Population variance (divides by n)
#[inline]
pub fn variance(data: &[f64]) -> f64 {
    let m = mean(data);
    let sum_sq: f64 = data
        .iter()
        .map(|&v| {
            let diff = v - m;
            diff * diff
        })
        .sum();

    sum_sq / (data.len() as f64)
}

#[inline]
pub fn stddev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Returns min and max in one pass
#[inline]
pub fn minmax(data: &[f64]) -> (f64, f64) {
    data.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_returns() {
        let r = simple_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(r.len(), 2);
        assert!((r[0] - 0.10).abs() < 1e-12);
        assert!((r[1] + 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_simple_returns_short_input() {
        assert!(simple_returns(&[]).is_empty());
        assert!(simple_returns(&[42.0]).is_empty());
    }

    #[test]
    fn test_population_stddev() {
        // ddof = 0: variance of [2,4,4,4,5,5,7,9] is exactly 4
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&data) - 5.0).abs() < 1e-12);
        assert!((stddev(&data) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_sample_has_zero_stddev() {
        assert_eq!(stddev(&[0.01, 0.01, 0.01]), 0.0);
    }

    #[test]
    fn test_minmax() {
        let (lo, hi) = minmax(&[3.0, -1.0, 7.5, 2.0]);
        assert_eq!(lo, -1.0);
        assert_eq!(hi, 7.5);
    }
}
