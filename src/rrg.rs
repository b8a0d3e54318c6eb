use std::{fmt::Display, num::NonZero};

use crate::{Price, Quadrant, mean_window::MeanWindow};

/// Configuration for the RRG value engine ([`Rrg`]).
///
/// Holds the four smoothing window lengths: `short`/`long` smooth the
/// raw price ratio into the RS-Ratio, `fast`/`slow` smooth the
/// RS-Ratio into the RS-Momentum. Window lengths scale with sampling
/// cadence so they span the same calendar duration; use the
/// [`weekly`](RrgConfig::weekly) and [`daily`](RrgConfig::daily)
/// presets unless you have a reason not to.
///
/// # Example
///
/// ```rust
/// use rrg_ta::RrgConfig;
///
/// let config = RrgConfig::weekly();
/// assert_eq!(config.short(), 10);
/// assert_eq!(config.long(), 26);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct RrgConfig {
    short: usize,
    long: usize,
    fast: usize,
    slow: usize,
}

impl RrgConfig {
    /// Returns a new builder with no windows set.
    #[must_use]
    pub fn builder() -> RrgConfigBuilder {
        RrgConfigBuilder::new()
    }

    /// Canonical weekly-cadence windows: 10/26 ratio smoothing,
    /// 1/4 momentum smoothing.
    #[must_use]
    pub fn weekly() -> Self {
        Self {
            short: 10,
            long: 26,
            fast: 1,
            slow: 4,
        }
    }

    /// Canonical daily-cadence windows: 50/130 ratio smoothing,
    /// 5/20 momentum smoothing — the weekly windows scaled by five
    /// trading days, covering the same calendar span.
    #[must_use]
    pub fn daily() -> Self {
        Self {
            short: 50,
            long: 130,
            fast: 5,
            slow: 20,
        }
    }

    /// Short ratio-smoothing window length.
    #[inline]
    #[must_use]
    pub fn short(&self) -> usize {
        self.short
    }

    /// Long ratio-smoothing window length.
    #[inline]
    #[must_use]
    pub fn long(&self) -> usize {
        self.long
    }

    /// Fast momentum-smoothing window length.
    #[inline]
    #[must_use]
    pub fn fast(&self) -> usize {
        self.fast
    }

    /// Slow momentum-smoothing window length.
    #[inline]
    #[must_use]
    pub fn slow(&self) -> usize {
        self.slow
    }

    /// Number of leading bars with undefined output:
    /// `long + slow - 1`.
    #[inline]
    #[must_use]
    pub fn undefined_prefix(&self) -> usize {
        self.long + self.slow - 1
    }
}

impl Display for RrgConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RrgConfig({}/{}, {}/{})",
            self.short, self.long, self.fast, self.slow
        )
    }
}

/// Builder for [`RrgConfig`].
///
/// All four windows must be set before calling
/// [`build`](RrgConfigBuilder::build). The build panics unless
/// `short < long` and `fast <= slow`.
pub struct RrgConfigBuilder {
    short: Option<usize>,
    long: Option<usize>,
    fast: Option<usize>,
    slow: Option<usize>,
}

impl RrgConfigBuilder {
    fn new() -> Self {
        Self {
            short: None,
            long: None,
            fast: None,
            slow: None,
        }
    }

    /// Sets the short ratio-smoothing window.
    #[must_use]
    pub fn short(mut self, length: NonZero<usize>) -> Self {
        self.short.replace(length.get());
        self
    }

    /// Sets the long ratio-smoothing window.
    #[must_use]
    pub fn long(mut self, length: NonZero<usize>) -> Self {
        self.long.replace(length.get());
        self
    }

    /// Sets the fast momentum-smoothing window.
    #[must_use]
    pub fn fast(mut self, length: NonZero<usize>) -> Self {
        self.fast.replace(length.get());
        self
    }

    /// Sets the slow momentum-smoothing window.
    #[must_use]
    pub fn slow(mut self, length: NonZero<usize>) -> Self {
        self.slow.replace(length.get());
        self
    }

    /// Builds the config. Panics if a window is missing or the window
    /// ordering is invalid.
    #[must_use]
    pub fn build(self) -> RrgConfig {
        let config = RrgConfig {
            short: self.short.expect("short window is required"),
            long: self.long.expect("long window is required"),
            fast: self.fast.expect("fast window is required"),
            slow: self.slow.expect("slow window is required"),
        };

        assert!(
            config.short < config.long,
            "short window must be shorter than long window"
        );
        assert!(
            config.fast <= config.slow,
            "fast window must not exceed slow window"
        );

        config
    }
}

/// One RRG observation: the (RS-Ratio, RS-Momentum) pair for one
/// instrument at one timestamp.
///
/// Both axes are centered on 100, the neutral point where short- and
/// long-term relative strength coincide. Either component may be
/// [`f64::NAN`] when the underlying data is undefined at that bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RrgPoint {
    rs_ratio: Price,
    rs_momentum: Price,
}

impl RrgPoint {
    /// The fully undefined point, used for leading bars without enough
    /// history.
    pub const UNDEFINED: Self = Self {
        rs_ratio: f64::NAN,
        rs_momentum: f64::NAN,
    };

    pub(crate) fn new(rs_ratio: Price, rs_momentum: Price) -> Self {
        Self {
            rs_ratio,
            rs_momentum,
        }
    }

    /// Smoothed relative-strength oscillator (x-axis).
    #[inline]
    #[must_use]
    pub fn rs_ratio(&self) -> Price {
        self.rs_ratio
    }

    /// Smoothed RS-Ratio momentum (y-axis).
    #[inline]
    #[must_use]
    pub fn rs_momentum(&self) -> Price {
        self.rs_momentum
    }

    /// `true` when both components are finite and the point can be
    /// plotted.
    #[inline]
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.rs_ratio.is_finite() && self.rs_momentum.is_finite()
    }

    /// Quadrant classification, or `None` for an undefined point.
    #[inline]
    #[must_use]
    pub fn quadrant(&self) -> Option<Quadrant> {
        Quadrant::classify(self.rs_ratio, self.rs_momentum)
    }
}

impl Display for RrgPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RRG(r: {}, m: {})", self.rs_ratio, self.rs_momentum)
    }
}

/// Per-instrument RRG history, aligned index-for-index with the price
/// series it was computed from.
pub type RrgSeries = Vec<RrgPoint>;

/// Raw price ratio between instrument and benchmark.
///
/// Undefined (NaN) unless both prices are finite and strictly
/// positive — price data with zeros or negatives has no meaningful
/// ratio, and the undefined value flows through the smoothing windows
/// instead of raising.
#[inline]
fn strength_ratio(instrument: Price, benchmark: Price) -> Price {
    if instrument.is_finite() && benchmark.is_finite() && instrument > 0.0 && benchmark > 0.0 {
        instrument / benchmark
    } else {
        f64::NAN
    }
}

/// `100 * ((fast - slow) / slow + 1)`, the 100-centered oscillator
/// shared by both RRG stages. NaN when the denominator is zero or NaN.
#[inline]
fn oscillator(fast: Price, slow: Price) -> Price {
    if slow == 0.0 || slow.is_nan() {
        f64::NAN
    } else {
        100.0 * ((fast - slow) / slow + 1.0)
    }
}

/// Streaming RRG value engine.
///
/// Feeds one aligned (instrument, benchmark) close pair per bar and
/// produces the JdK-style RS-Ratio / RS-Momentum pair once enough
/// history has accumulated. The pipeline is: price ratio, short/long
/// simple moving averages of the ratio, the 100-centered RS-Ratio,
/// fast/slow simple moving averages of the RS-Ratio, the 100-centered
/// RS-Momentum.
///
/// Output is `None` for the first `long + slow - 1` bars (the ratio
/// stage needs `long` bars, the momentum stage `slow` more, minus the
/// shared bar, plus one warm-up bar after the slow window first
/// fills). After convergence the output is always `Some`, but its
/// components are NaN whenever a non-positive or missing price sits
/// inside a smoothing window.
///
/// The engine is deterministic and has no hidden state: identical
/// input sequences produce identical output sequences.
///
/// # Example
///
/// ```rust
/// use rrg_ta::{Rrg, RrgConfig};
/// use std::num::NonZero;
///
/// let nz = |n| NonZero::new(n).unwrap();
/// let config = RrgConfig::builder()
///     .short(nz(2))
///     .long(nz(3))
///     .fast(nz(1))
///     .slow(nz(2))
///     .build();
/// let mut rrg = Rrg::new(config);
///
/// // Constant ratio: both axes settle at exactly 100.
/// for _ in 0..config.undefined_prefix() {
///     assert_eq!(rrg.compute(50.0, 100.0), None);
/// }
/// let point = rrg.compute(50.0, 100.0).unwrap();
/// assert_eq!(point.rs_ratio(), 100.0);
/// assert_eq!(point.rs_momentum(), 100.0);
/// ```
#[derive(Clone, Debug)]
pub struct Rrg {
    config: RrgConfig,
    short: MeanWindow,
    long: MeanWindow,
    fast: MeanWindow,
    slow: MeanWindow,
    primed: bool,
    current: Option<RrgPoint>,
}

impl Rrg {
    /// Creates a new engine from the given config.
    #[must_use]
    pub fn new(config: RrgConfig) -> Self {
        Self {
            config,
            short: MeanWindow::new(config.short),
            long: MeanWindow::new(config.long),
            fast: MeanWindow::new(config.fast),
            slow: MeanWindow::new(config.slow),
            primed: false,
            current: None,
        }
    }

    /// Feeds one bar's instrument and benchmark closes and returns the
    /// updated RRG point, or `None` while still converging.
    #[inline]
    pub fn compute(&mut self, instrument: Price, benchmark: Price) -> Option<RrgPoint> {
        let ratio = strength_ratio(instrument, benchmark);

        let short_ma = self.short.push(ratio);
        let long_ma = self.long.push(ratio);

        // The long window gates the ratio stage structurally; the
        // short window is always full by then since short < long.
        let long_ma = long_ma?;
        let short_ma = short_ma.expect("short window must fill before long window");

        let rs_ratio = oscillator(short_ma, long_ma);

        let fast_ma = self.fast.push(rs_ratio);
        let slow_ma = self.slow.push(rs_ratio)?;
        let fast_ma = fast_ma.expect("fast window must fill before slow window");

        // One extra warm-up bar after the slow window fills keeps the
        // undefined prefix at exactly long + slow - 1 bars.
        if !self.primed {
            self.primed = true;
            return None;
        }

        let rs_momentum = oscillator(fast_ma, slow_ma);

        self.current = Some(RrgPoint::new(rs_ratio, rs_momentum));
        self.current
    }

    /// Returns the last computed point without advancing state, or
    /// `None` if not yet converged.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<RrgPoint> {
        self.current
    }
}

impl Display for Rrg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RRG({}/{}, {}/{})",
            self.config.short, self.config.long, self.config.fast, self.config.slow
        )
    }
}

/// Computes the full RS-Ratio / RS-Momentum history for one instrument
/// against a benchmark.
///
/// Both slices must be the same length and aligned on shared
/// timestamps. The output has the same length and index as the input;
/// the first `long + slow - 1` entries are [`RrgPoint::UNDEFINED`],
/// as are later entries whose smoothing windows contain missing or
/// non-positive prices.
///
/// # Panics
///
/// Panics if the slices differ in length.
#[must_use]
pub fn compute_rrg(instrument: &[Price], benchmark: &[Price], config: RrgConfig) -> RrgSeries {
    assert_eq!(
        instrument.len(),
        benchmark.len(),
        "instrument and benchmark series must be aligned"
    );

    let mut rrg = Rrg::new(config);

    instrument
        .iter()
        .zip(benchmark)
        .map(|(&close, &bench)| rrg.compute(close, bench).unwrap_or(RrgPoint::UNDEFINED))
        .collect()
}
