/// Asserts two `f64` values are within an absolute tolerance.
pub(crate) fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Reference SMA: recomputes each window sum from scratch, O(n·w).
///
/// Independent of the running-sum engine, so the two implementations
/// cross-check each other. Output is NaN until the window fills and
/// whenever the window contains a NaN (the sum propagates it).
pub(crate) fn naive_sma(values: &[f64], window: usize) -> Vec<f64> {
    #[allow(clippy::cast_precision_loss)]
    let divisor = window as f64;

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                f64::NAN
            } else {
                values[i + 1 - window..=i].iter().sum::<f64>() / divisor
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_sma_prefix_is_nan() {
        let sma = naive_sma(&[1.0, 2.0, 3.0], 3);
        assert!(sma[0].is_nan() && sma[1].is_nan());
        assert_eq!(sma[2], 2.0);
    }

    #[test]
    fn naive_sma_propagates_nan_through_window() {
        let sma = naive_sma(&[1.0, f64::NAN, 3.0, 4.0, 5.0], 2);
        assert!(sma[1].is_nan() && sma[2].is_nan());
        assert_eq!(sma[3], 3.5);
    }
}
