use crate::Price;

use std::fmt::Display;

/// One of the four canonical RRG quadrants.
///
/// Determined by whether RS-Ratio and RS-Momentum sit above or below
/// the 100 divider. Rotation conventionally moves clockwise:
/// Improving, Leading, Weakening, Lagging.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Quadrant {
    /// RS-Ratio < 100, RS-Momentum < 100: underperforming and losing
    /// momentum.
    Lagging,
    /// RS-Ratio >= 100, RS-Momentum < 100: still outperforming, but
    /// rolling over.
    Weakening,
    /// RS-Ratio < 100, RS-Momentum >= 100: underperforming, but
    /// turning up.
    Improving,
    /// RS-Ratio >= 100, RS-Momentum >= 100: outperforming with rising
    /// momentum.
    Leading,
}

impl Quadrant {
    /// Classifies an (RS-Ratio, RS-Momentum) pair, or `None` when
    /// either value is NaN.
    ///
    /// Values exactly on the divider count as the right/top side, so a
    /// neutral 100/100 point classifies as [`Leading`](Self::Leading).
    #[must_use]
    pub fn classify(rs_ratio: Price, rs_momentum: Price) -> Option<Self> {
        if rs_ratio.is_nan() || rs_momentum.is_nan() {
            return None;
        }

        Some(match (rs_ratio < 100.0, rs_momentum < 100.0) {
            (true, true) => Self::Lagging,
            (false, true) => Self::Weakening,
            (true, false) => Self::Improving,
            (false, false) => Self::Leading,
        })
    }

    /// CSS color for the quadrant's background rectangle.
    #[must_use]
    pub fn fill_color(self) -> &'static str {
        match self {
            Self::Lagging => "pink",
            Self::Weakening => "lightyellow",
            Self::Improving => "lightblue",
            Self::Leading => "lightgreen",
        }
    }

    /// CSS color for an instrument trail currently in this quadrant.
    #[must_use]
    pub fn trail_color(self) -> &'static str {
        match self {
            Self::Lagging => "red",
            Self::Weakening => "orange",
            Self::Improving => "darkblue",
            Self::Leading => "darkgreen",
        }
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
