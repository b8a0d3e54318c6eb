use crate::{Price, RrgPoint};

use std::fmt::Display;

/// Returns the trailing `window_length` points of a series, or the
/// whole series when history is shorter.
///
/// This is the display window: pick `window_length` so the trail
/// spans a comparable calendar duration at either cadence (see
/// [`Cadence::default_trail`](crate::Cadence::default_trail)).
/// Undefined points inside the window are excluded from plotting
/// downstream, not here.
#[must_use]
pub fn trail(points: &[RrgPoint], window_length: usize) -> &[RrgPoint] {
    &points[points.len().saturating_sub(window_length)..]
}

/// Padding and clamping policy for [`compute_viewport`].
///
/// The default reproduces the canonical chart: 5% fractional padding,
/// bounds clamped into [90, 110], and a minimum half-span of 1 around
/// the divider. [`wide`](ViewportConfig::wide) and
/// [`tight`](ViewportConfig::tight) cover the other observed chart
/// variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    padding: f64,
    abs_min: Price,
    abs_max: Price,
    min_span: Price,
}

impl ViewportConfig {
    /// Creates a config.
    ///
    /// # Panics
    ///
    /// Panics when the parameters cannot keep the 100/100 divider
    /// visible: `padding` must be non-negative, `min_span` positive,
    /// and the clamp range must contain
    /// `[100 - min_span, 100 + min_span]`.
    #[must_use]
    pub fn new(padding: f64, abs_min: Price, abs_max: Price, min_span: Price) -> Self {
        assert!(padding >= 0.0, "padding must be non-negative");
        assert!(min_span > 0.0, "min_span must be positive");
        assert!(
            abs_min <= Viewport::DIVIDER - min_span,
            "clamp floor must leave the divider visible"
        );
        assert!(
            abs_max >= Viewport::DIVIDER + min_span,
            "clamp ceiling must leave the divider visible"
        );

        Self {
            padding,
            abs_min,
            abs_max,
            min_span,
        }
    }

    /// Wide clamp variant: bounds within [80, 120].
    #[must_use]
    pub fn wide() -> Self {
        Self::new(0.05, 80.0, 120.0, 1.0)
    }

    /// Tight clamp variant: bounds within [94, 106].
    #[must_use]
    pub fn tight() -> Self {
        Self::new(0.05, 94.0, 106.0, 1.0)
    }

    /// Fraction of the observed range added on each side.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Absolute lower clamp for both axes.
    #[must_use]
    pub fn abs_min(&self) -> Price {
        self.abs_min
    }

    /// Absolute upper clamp for both axes.
    #[must_use]
    pub fn abs_max(&self) -> Price {
        self.abs_max
    }

    /// Minimum half-span kept around the divider and used as the
    /// zero-range fallback.
    #[must_use]
    pub fn min_span(&self) -> Price {
        self.min_span
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::new(0.05, 90.0, 110.0, 1.0)
    }
}

/// Plot bounds for one render, derived from the trailing window of
/// every instrument's RRG series.
///
/// Invariant: `min < 100 < max` on both axes, so the quadrant divider
/// cross stays visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    min_x: Price,
    max_x: Price,
    min_y: Price,
    max_y: Price,
}

impl Viewport {
    /// Position of the quadrant divider lines on both axes.
    pub const DIVIDER: Price = 100.0;

    /// Lower RS-Ratio bound.
    #[must_use]
    pub fn min_x(&self) -> Price {
        self.min_x
    }

    /// Upper RS-Ratio bound.
    #[must_use]
    pub fn max_x(&self) -> Price {
        self.max_x
    }

    /// Lower RS-Momentum bound.
    #[must_use]
    pub fn min_y(&self) -> Price {
        self.min_y
    }

    /// Upper RS-Momentum bound.
    #[must_use]
    pub fn max_y(&self) -> Price {
        self.max_y
    }
}

impl Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Viewport(x: [{}, {}], y: [{}, {}])",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// Expands one axis' raw data bounds into plot bounds.
fn axis_bounds(data_min: Price, data_max: Price, config: &ViewportConfig) -> (Price, Price) {
    let range = data_max - data_min;

    let (mut lo, mut hi) = if range == 0.0 {
        // Degenerate range: fall back to a fixed span centered on the
        // data instead of a zero-width viewport.
        (data_min - config.min_span, data_max + config.min_span)
    } else {
        (
            data_min - range * config.padding,
            data_max + range * config.padding,
        )
    };

    // Keep the quadrant cross visible even when all data sits on one
    // side of the divider.
    lo = lo.min(Viewport::DIVIDER - config.min_span);
    hi = hi.max(Viewport::DIVIDER + config.min_span);

    (lo.max(config.abs_min), hi.min(config.abs_max))
}

/// Computes stable per-axis plot bounds from the trailing window of
/// all instruments' points.
///
/// Raw min/max per axis over finite values, expanded by the
/// configured fractional padding, widened to keep the 100/100 divider
/// inside, then clamped into the configured absolute range. Returns
/// `None` when no point has a finite value on both axes — there is
/// nothing to plot.
///
/// The result depends only on the points and the config; it is
/// recomputed fresh each render.
pub fn compute_viewport<'a, I>(points: I, config: &ViewportConfig) -> Option<Viewport>
where
    I: IntoIterator<Item = &'a RrgPoint>,
{
    let mut x_bounds: Option<(Price, Price)> = None;
    let mut y_bounds: Option<(Price, Price)> = None;

    let widen = |bounds: &mut Option<(Price, Price)>, value: Price| {
        if value.is_finite() {
            let (lo, hi) = bounds.get_or_insert((value, value));
            *lo = lo.min(value);
            *hi = hi.max(value);
        }
    };

    for point in points {
        widen(&mut x_bounds, point.rs_ratio());
        widen(&mut y_bounds, point.rs_momentum());
    }

    let (min_x, max_x) = axis_bounds(x_bounds?.0, x_bounds?.1, config);
    let (min_y, max_y) = axis_bounds(y_bounds?.0, y_bounds?.1, config);

    Some(Viewport {
        min_x,
        max_x,
        min_y,
        max_y,
    })
}
