use std::num::NonZero;

use thiserror::Error;

use crate::{
    Basket, Cadence, Price, PriceTable, Quadrant, RrgConfig, RrgPoint, Timestamp, Viewport,
    ViewportConfig, compute_rrg,
    viewport::{compute_viewport, trail},
};

/// Errors that can fail a whole chart request.
///
/// Per-instrument data problems never appear here — they degrade to a
/// warning and the instrument is dropped. Only the benchmark, or the
/// basket as a whole, can sink a request.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The benchmark column is absent or has no finite close; every
    /// ratio depends on it, so no chart can be produced.
    #[error("no price data for benchmark '{0}'")]
    MissingBenchmark(String),

    /// Every basket member was dropped; there is nothing to plot.
    #[error("no instrument in the basket has displayable data")]
    NoDisplayableData,

    /// A custom basket was requested with no tickers.
    #[error("custom basket needs at least one ticker")]
    EmptyUniverse,

    /// A custom basket lists its own benchmark as a member.
    #[error("benchmark '{0}' is also listed as a basket member")]
    DuplicateBenchmark(String),
}

/// Configuration for one chart request.
///
/// Constructed from a [`Cadence`], which presets the smoothing
/// windows and trail length; individual pieces can be overridden.
///
/// # Example
///
/// ```rust
/// use rrg_ta::{Cadence, ChartConfig, ViewportConfig};
/// use std::num::NonZero;
///
/// let config = ChartConfig::new(Cadence::Daily)
///     .with_trail_length(NonZero::new(10).unwrap())
///     .with_viewport(ViewportConfig::wide());
/// assert_eq!(config.trail_length(), 10);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ChartConfig {
    cadence: Cadence,
    trail_length: usize,
    rrg: RrgConfig,
    viewport: ViewportConfig,
}

impl ChartConfig {
    /// Cadence-preset configuration.
    #[must_use]
    pub fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            trail_length: cadence.default_trail(),
            rrg: cadence.rrg_config(),
            viewport: ViewportConfig::default(),
        }
    }

    /// Overrides the number of trailing points to plot.
    #[must_use]
    pub fn with_trail_length(mut self, length: NonZero<usize>) -> Self {
        self.trail_length = length.get();
        self
    }

    /// Overrides the smoothing windows.
    #[must_use]
    pub fn with_rrg(mut self, rrg: RrgConfig) -> Self {
        self.rrg = rrg;
        self
    }

    /// Overrides the viewport policy.
    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportConfig) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sampling cadence.
    #[must_use]
    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Number of trailing points to plot.
    #[must_use]
    pub fn trail_length(&self) -> usize {
        self.trail_length
    }

    /// Smoothing windows.
    #[must_use]
    pub fn rrg(&self) -> RrgConfig {
        self.rrg
    }

    /// Viewport policy.
    #[must_use]
    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Cadence::default())
    }
}

/// One plotted observation: everything the renderer needs for the
/// marker and its hover text.
#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    timestamp: Timestamp,
    close: Price,
    rs_ratio: Price,
    rs_momentum: Price,
    quadrant: Quadrant,
}

impl TrailPoint {
    /// Bar timestamp (epoch milliseconds).
    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Closing price at this bar, after resampling.
    #[must_use]
    pub fn close(&self) -> Price {
        self.close
    }

    /// RS-Ratio (x-axis).
    #[must_use]
    pub fn rs_ratio(&self) -> Price {
        self.rs_ratio
    }

    /// RS-Momentum (y-axis).
    #[must_use]
    pub fn rs_momentum(&self) -> Price {
        self.rs_momentum
    }

    /// Quadrant of this observation.
    #[must_use]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }
}

/// One instrument's plotted trail through the quadrants.
///
/// Contains only defined points; instruments with nothing displayable
/// in the trailing window are dropped from the chart entirely.
#[derive(Clone, Debug)]
pub struct InstrumentTrail {
    ticker: String,
    name: String,
    legend_label: String,
    chart_label: String,
    points: Vec<TrailPoint>,
    quadrant: Quadrant,
    color: &'static str,
    label_above: bool,
}

impl InstrumentTrail {
    /// Instrument ticker.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Instrument display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Legend entry, styled per the basket's label rules.
    #[must_use]
    pub fn legend_label(&self) -> &str {
        &self.legend_label
    }

    /// Marker label, styled per the basket's label rules.
    #[must_use]
    pub fn chart_label(&self) -> &str {
        &self.chart_label
    }

    /// Plotted points, oldest first. Never empty.
    #[must_use]
    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    /// Quadrant of the most recent point.
    #[must_use]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Trail color keyed to the current quadrant.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// `true` when the marker label should sit above the latest
    /// point (momentum flat or rising), `false` when below.
    #[must_use]
    pub fn label_above(&self) -> bool {
        self.label_above
    }
}

/// A fully computed chart, ready to hand to the renderer.
#[derive(Clone, Debug)]
pub struct RrgChart {
    title: String,
    trails: Vec<InstrumentTrail>,
    viewport: Viewport,
}

impl RrgChart {
    /// Chart heading, e.g. `"S&P 500 Sectors (Weekly)"`.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Per-instrument trails, in basket order. Never empty.
    #[must_use]
    pub fn trails(&self) -> &[InstrumentTrail] {
        &self.trails
    }

    /// Axis bounds for this render.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Divider-line position on both axes.
    #[must_use]
    pub fn divider(&self) -> Price {
        Viewport::DIVIDER
    }
}

/// Computes a complete RRG chart for one basket from a fresh price
/// table.
///
/// Resamples the table to the configured cadence, runs the RRG value
/// engine per member, keeps the trailing display window, derives the
/// viewport, and classifies each instrument's current quadrant.
///
/// Members without a price column, or without a single defined point
/// in the trailing window, are dropped with a warning; the rest of
/// the basket is unaffected.
///
/// # Errors
///
/// [`ChartError::MissingBenchmark`] when the benchmark has no data at
/// all, [`ChartError::NoDisplayableData`] when every member was
/// dropped.
pub fn build_chart(
    table: &PriceTable,
    basket: &Basket,
    config: &ChartConfig,
) -> Result<RrgChart, ChartError> {
    let resampled;
    let table = match config.cadence() {
        Cadence::Weekly => {
            resampled = table.resample_weekly();
            &resampled
        }
        Cadence::Daily => table,
    };

    let bench_ticker = basket.benchmark().ticker();
    let benchmark = table
        .column(bench_ticker)
        .ok_or_else(|| ChartError::MissingBenchmark(bench_ticker.to_owned()))?;
    if !benchmark.iter().any(|close| close.is_finite()) {
        return Err(ChartError::MissingBenchmark(bench_ticker.to_owned()));
    }

    let timestamps = table.timestamps();
    let style = basket.label_style();

    let mut trails = Vec::new();
    let mut plotted: Vec<RrgPoint> = Vec::new();

    for member in basket.members() {
        let Some(closes) = table.column(member.ticker()) else {
            log::warn!("dropping {}: no price data", member.ticker());
            continue;
        };

        let series = compute_rrg(closes, benchmark, config.rrg());
        let tail = trail(&series, config.trail_length());
        let start = series.len() - tail.len();

        let points: Vec<TrailPoint> = tail
            .iter()
            .enumerate()
            .filter_map(|(offset, point)| {
                point.quadrant().map(|quadrant| TrailPoint {
                    timestamp: timestamps[start + offset],
                    close: closes[start + offset],
                    rs_ratio: point.rs_ratio(),
                    rs_momentum: point.rs_momentum(),
                    quadrant,
                })
            })
            .collect();

        let Some(last) = points.last() else {
            log::warn!(
                "dropping {}: no displayable points in the trailing window",
                member.ticker()
            );
            continue;
        };

        let quadrant = last.quadrant();
        let label_above = points
            .len()
            .checked_sub(2)
            .is_none_or(|prev| last.rs_momentum() >= points[prev].rs_momentum());

        plotted.extend(
            points
                .iter()
                .map(|p| RrgPoint::new(p.rs_ratio(), p.rs_momentum())),
        );

        trails.push(InstrumentTrail {
            ticker: member.ticker().to_owned(),
            name: member.name().to_owned(),
            legend_label: member.legend_label(style),
            chart_label: member.chart_label(style),
            points,
            quadrant,
            color: quadrant.trail_color(),
            label_above,
        });
    }

    let viewport =
        compute_viewport(&plotted, config.viewport()).ok_or(ChartError::NoDisplayableData)?;

    Ok(RrgChart {
        title: format!("{} ({})", basket.title(), config.cadence()),
        trails,
        viewport,
    })
}
