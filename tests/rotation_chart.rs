mod fixtures;

use fixtures::load_fixture_table;
use rrg_ta::{
    Basket, Cadence, ChartConfig, ChartError, InstrumentTrail, Quadrant, Viewport, build_chart,
};
use std::num::NonZero;

const FIXTURE_TICKERS: [&str; 5] = ["XLE", "XLF", "XLK", "XLU", "XLV"];

fn nz(n: usize) -> NonZero<usize> {
    NonZero::new(n).unwrap()
}

fn assert_viewport_invariants(viewport: Viewport) {
    assert!(viewport.min_x() < Viewport::DIVIDER && Viewport::DIVIDER < viewport.max_x());
    assert!(viewport.min_y() < Viewport::DIVIDER && Viewport::DIVIDER < viewport.max_y());
    assert!(viewport.min_x() >= 90.0 && viewport.max_x() <= 110.0);
    assert!(viewport.min_y() >= 90.0 && viewport.max_y() <= 110.0);
}

#[test]
fn daily_chart_from_fixture_table() {
    let table = load_fixture_table();
    let chart = build_chart(
        &table,
        &Basket::us_sectors(),
        &ChartConfig::new(Cadence::Daily),
    )
    .unwrap();

    // The fixture carries five of the eleven sector ETFs; the rest
    // degrade to warnings, in basket order.
    let tickers: Vec<_> = chart.trails().iter().map(InstrumentTrail::ticker).collect();
    assert_eq!(tickers, FIXTURE_TICKERS);

    for sector_trail in chart.trails() {
        let points = sector_trail.points();
        assert!(!points.is_empty());
        assert!(points.len() <= Cadence::Daily.default_trail());

        for pair in points.windows(2) {
            assert!(pair[0].timestamp() < pair[1].timestamp());
        }
        for point in points {
            assert!(point.rs_ratio().is_finite() && point.rs_momentum().is_finite());
            assert!(point.close().is_finite());
        }

        let last = points.last().unwrap();
        assert_eq!(sector_trail.quadrant(), last.quadrant());
        assert_eq!(sector_trail.color(), last.quadrant().trail_color());
    }

    assert_viewport_invariants(chart.viewport());
    assert_eq!(chart.title(), "S&P 500 Sectors (Daily)");
}

#[test]
fn weekly_chart_resamples_the_same_table() {
    let table = load_fixture_table();
    let chart = build_chart(
        &table,
        &Basket::us_sectors(),
        &ChartConfig::new(Cadence::Weekly),
    )
    .unwrap();

    for sector_trail in chart.trails() {
        assert!(sector_trail.points().len() <= Cadence::Weekly.default_trail());
    }
    assert_viewport_invariants(chart.viewport());
    assert_eq!(chart.title(), "S&P 500 Sectors (Weekly)");
}

#[test]
fn oversized_trail_window_is_bounded_by_defined_history() {
    let table = load_fixture_table();
    let config = ChartConfig::new(Cadence::Daily).with_trail_length(nz(1000));
    let chart = build_chart(&table, &Basket::us_sectors(), &config).unwrap();

    // 320 bars minus the 149-bar undefined prefix.
    let expected_defined = table.len() - Cadence::Daily.rrg_config().undefined_prefix();
    for sector_trail in chart.trails() {
        assert_eq!(sector_trail.points().len(), expected_defined);
    }
}

#[test]
fn missing_benchmark_fails_the_request() {
    let table = load_fixture_table();
    // A basket whose benchmark the fixture does not carry.
    let basket = Basket::custom("QQQ", &["XLK", "XLF"]).unwrap();

    let err = build_chart(&table, &basket, &ChartConfig::new(Cadence::Daily)).unwrap_err();
    assert!(matches!(err, ChartError::MissingBenchmark(ticker) if ticker == "QQQ"));
}

#[test]
fn absent_member_does_not_alter_the_others() {
    let table = load_fixture_table();
    let with_ghost = Basket::custom("SPY", &["XLK", "XLF", "XLE", "XLV", "GHOST"]).unwrap();
    let without_ghost = Basket::custom("SPY", &["XLK", "XLF", "XLE", "XLV"]).unwrap();
    let config = ChartConfig::new(Cadence::Daily);

    let degraded = build_chart(&table, &with_ghost, &config).unwrap();
    let baseline = build_chart(&table, &without_ghost, &config).unwrap();

    assert_eq!(degraded.trails().len(), baseline.trails().len());
    for (a, b) in degraded.trails().iter().zip(baseline.trails()) {
        assert_eq!(a.ticker(), b.ticker());
        assert_eq!(a.points().len(), b.points().len());
        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert_eq!(pa.rs_ratio().to_bits(), pb.rs_ratio().to_bits());
            assert_eq!(pa.rs_momentum().to_bits(), pb.rs_momentum().to_bits());
        }
    }
    assert_eq!(degraded.viewport(), baseline.viewport());
}

#[test]
fn quadrant_colors_follow_classification() {
    let table = load_fixture_table();
    let chart = build_chart(
        &table,
        &Basket::us_sectors(),
        &ChartConfig::new(Cadence::Daily),
    )
    .unwrap();

    for sector_trail in chart.trails() {
        let expected = match sector_trail.quadrant() {
            Quadrant::Lagging => "red",
            Quadrant::Weakening => "orange",
            Quadrant::Improving => "darkblue",
            Quadrant::Leading => "darkgreen",
        };
        assert_eq!(sector_trail.color(), expected);
    }
}
