mod fixtures;

use fixtures::assert_near;
use rrg_ta::{RrgConfig, ViewportConfig, compute_rrg, compute_viewport, trail};

/// 100 weekly bars with a mild deterministic wobble, strictly
/// positive.
fn wobbly_series(base: f64, slope: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64;
            base + slope * t + (t * 0.7).sin()
        })
        .collect()
}

#[test]
fn output_matches_input_length_with_undefined_prefix() {
    let config = RrgConfig::weekly();
    let instrument = wobbly_series(120.0, 0.3, 100);
    let benchmark = wobbly_series(300.0, 0.2, 100);

    let series = compute_rrg(&instrument, &benchmark, config);

    assert_eq!(series.len(), 100);
    let first_defined = series
        .iter()
        .position(rrg_ta::RrgPoint::is_defined)
        .expect("100 clean bars must converge");
    assert_eq!(first_defined, config.undefined_prefix());
    assert!(series[first_defined..].iter().all(rrg_ta::RrgPoint::is_defined));
}

#[test]
fn constant_ratio_sits_exactly_on_the_neutral_point() {
    // Scenario: instrument and benchmark both flat at 50.
    let config = RrgConfig::weekly();
    let series = compute_rrg(&[50.0; 40], &[50.0; 40], config);

    for point in &series[config.undefined_prefix()..] {
        assert_eq!(point.rs_ratio(), 100.0);
        assert_eq!(point.rs_momentum(), 100.0);
    }
}

#[test]
fn recomputation_is_bit_identical() {
    let config = RrgConfig::weekly();
    let instrument = wobbly_series(90.0, 0.5, 80);
    let benchmark = wobbly_series(200.0, 0.1, 80);

    let first = compute_rrg(&instrument, &benchmark, config);
    let second = compute_rrg(&instrument, &benchmark, config);

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.rs_ratio().to_bits(), b.rs_ratio().to_bits());
        assert_eq!(a.rs_momentum().to_bits(), b.rs_momentum().to_bits());
    }
}

#[test]
fn common_scale_factor_cancels() {
    let config = RrgConfig::weekly();
    let instrument = wobbly_series(90.0, 0.5, 80);
    let benchmark = wobbly_series(200.0, 0.1, 80);
    let scaled_instrument: Vec<f64> = instrument.iter().map(|v| v * 7.25).collect();
    let scaled_benchmark: Vec<f64> = benchmark.iter().map(|v| v * 7.25).collect();

    let plain = compute_rrg(&instrument, &benchmark, config);
    let scaled = compute_rrg(&scaled_instrument, &scaled_benchmark, config);

    for (i, (a, b)) in plain.iter().zip(&scaled).enumerate().skip(config.undefined_prefix()) {
        assert_near(b.rs_ratio(), a.rs_ratio(), 1e-9, &format!("rs_ratio at bar {i}"));
        assert_near(b.rs_momentum(), a.rs_momentum(), 1e-9, &format!("rs_momentum at bar {i}"));
    }
}

#[test]
fn steady_outperformance_decays_toward_neutral_from_above() {
    // Scenario: benchmark flat, instrument climbing linearly — it
    // doubles over the long window. Relative strength stays above
    // 100 and approaches it monotonically as the base grows.
    let config = RrgConfig::weekly();
    let benchmark = vec![100.0; 60];
    let instrument: Vec<f64> = (0..60).map(|i| 100.0 + 4.0 * f64::from(i)).collect();

    let series = compute_rrg(&instrument, &benchmark, config);
    let defined: Vec<f64> = series[config.undefined_prefix()..]
        .iter()
        .map(rrg_ta::RrgPoint::rs_ratio)
        .collect();

    for (i, rs) in defined.iter().enumerate() {
        assert!(*rs > 100.0, "rs_ratio at {i} not above neutral: {rs}");
    }
    for pair in defined.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-12, "rs_ratio not monotonic: {pair:?}");
    }
}

#[test]
fn daily_windows_reproduce_weekly_values_at_week_ends() {
    // Scenario: the same price pattern sampled weekly and daily
    // (each weekly close held for five trading days). Window lengths
    // scaled by five must produce the same RS-Ratio wherever the
    // daily windows line up with whole weeks.
    let weeks = 80;
    let weekly_instrument: Vec<f64> = (0..weeks).map(|k| 100.0 + 2.0 * f64::from(k)).collect();
    let weekly_benchmark = vec![100.0; weeks as usize];
    let daily_instrument: Vec<f64> = weekly_instrument
        .iter()
        .flat_map(|&v| std::iter::repeat_n(v, 5))
        .collect();
    let daily_benchmark = vec![100.0; daily_instrument.len()];

    let weekly = compute_rrg(&weekly_instrument, &weekly_benchmark, RrgConfig::weekly());
    let daily = compute_rrg(&daily_instrument, &daily_benchmark, RrgConfig::daily());

    let mut compared = 0;
    for k in 0..weeks as usize {
        let week_end = 5 * k + 4;
        if weekly[k].is_defined() && daily[week_end].is_defined() {
            assert_near(
                daily[week_end].rs_ratio(),
                weekly[k].rs_ratio(),
                1e-9,
                &format!("week {k}"),
            );
            compared += 1;
        }
    }
    assert!(compared >= 40, "too few comparable weeks: {compared}");

    // Both cadences agree the trajectory is easing back toward
    // neutral: the week-end RS-Ratio sequence decreases.
    let weekly_tail: Vec<f64> = weekly
        .iter()
        .filter(|p| p.is_defined())
        .map(rrg_ta::RrgPoint::rs_ratio)
        .collect();
    for pair in weekly_tail.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-12);
    }
}

#[test]
fn viewport_from_computed_series_contains_divider_and_clamps() {
    let config = RrgConfig::weekly();
    let instrument = wobbly_series(120.0, 0.8, 100);
    let benchmark = wobbly_series(300.0, 0.1, 100);
    let series = compute_rrg(&instrument, &benchmark, config);
    let tail = trail(&series, 5);

    let viewport = compute_viewport(tail, &ViewportConfig::default()).unwrap();

    assert!(viewport.min_x() < 100.0 && 100.0 < viewport.max_x());
    assert!(viewport.min_y() < 100.0 && 100.0 < viewport.max_y());
    assert!(viewport.min_x() >= 90.0 && viewport.max_x() <= 110.0);
    assert!(viewport.min_y() >= 90.0 && viewport.max_y() <= 110.0);

    for point in tail.iter().filter(|p| p.is_defined()) {
        let x = point.rs_ratio().clamp(90.0, 110.0);
        let y = point.rs_momentum().clamp(90.0, 110.0);
        assert!(viewport.min_x() <= x && x <= viewport.max_x());
        assert!(viewport.min_y() <= y && y <= viewport.max_y());
    }
}

#[test]
fn viewport_span_grows_with_padding() {
    let config = RrgConfig::weekly();
    let instrument = wobbly_series(120.0, 0.8, 100);
    let benchmark = wobbly_series(300.0, 0.1, 100);
    let series = compute_rrg(&instrument, &benchmark, config);
    let tail = trail(&series, 5);

    let mut prev = 0.0;
    for padding in [0.0, 0.05, 0.2, 1.0] {
        let viewport =
            compute_viewport(tail, &ViewportConfig::new(padding, 90.0, 110.0, 1.0)).unwrap();
        let span = viewport.max_x() - viewport.min_x();
        assert!(span >= prev, "span shrank at padding {padding}");
        prev = span;
    }
}
