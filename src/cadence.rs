use crate::RrgConfig;

use std::fmt::Display;

/// Sampling cadence of the price table.
///
/// The cadence scales every window in the pipeline so that smoothing
/// and trail lengths cover the same calendar span whether the table
/// holds daily or weekly closes.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum Cadence {
    /// One bar per trading day.
    Daily,
    /// One bar per week, resampled to the Friday close.
    #[default]
    Weekly,
}

impl Cadence {
    /// Canonical RRG smoothing windows for this cadence.
    #[must_use]
    pub fn rrg_config(self) -> RrgConfig {
        match self {
            Self::Daily => RrgConfig::daily(),
            Self::Weekly => RrgConfig::weekly(),
        }
    }

    /// Default number of trailing points to plot: roughly four weeks
    /// of history at either cadence.
    #[must_use]
    pub fn default_trail(self) -> usize {
        match self {
            Self::Daily => 20,
            Self::Weekly => 5,
        }
    }

    /// Suggested fetch window for the data-retrieval collaborator:
    /// about two years of history, enough to fill the smoothing
    /// windows with a comfortable margin.
    #[must_use]
    pub fn lookback_bars(self) -> usize {
        match self {
            Self::Daily => 500,
            Self::Weekly => 100,
        }
    }
}

impl Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
