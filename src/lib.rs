//! Relative Rotation Graph (RRG) analytics for Rust.
//!
//! Turns a table of closing prices into the two JdK-style oscillator
//! series — RS-Ratio and RS-Momentum, both centered on 100 — and
//! assembles everything a renderer needs to draw the four-quadrant
//! rotation chart: trailing trails per instrument, quadrant
//! classification and colors, and stable axis bounds that keep the
//! 100/100 divider cross visible.
//!
//! Market-data retrieval and chart drawing stay outside this crate:
//! feed closes in through [`PriceTableBuilder`], hand the resulting
//! [`RrgChart`] to your renderer.
//!
//! # Example
//!
//! ```rust
//! use rrg_ta::{Basket, Cadence, ChartConfig, PriceTable, RrgConfig, build_chart};
//! use std::num::NonZero;
//!
//! let nz = |n| NonZero::new(n).unwrap();
//!
//! let basket = Basket::custom("SPY", &["XLK"]).unwrap();
//!
//! let mut builder = PriceTable::builder();
//! for day in 0..40u64 {
//!     let ts = day * 86_400_000;
//!     builder.push_close("SPY", ts, 500.0);
//!     builder.push_close("XLK", ts, 210.0 + day as f64);
//! }
//!
//! let config = ChartConfig::new(Cadence::Daily)
//!     .with_rrg(
//!         RrgConfig::builder()
//!             .short(nz(3))
//!             .long(nz(6))
//!             .fast(nz(2))
//!             .slow(nz(4))
//!             .build(),
//!     )
//!     .with_trail_length(nz(5));
//!
//! let chart = build_chart(&builder.build(), &basket, &config).unwrap();
//!
//! // XLK outpaces the flat benchmark, so it plots right of the divider.
//! assert_eq!(chart.trails().len(), 1);
//! assert!(chart.trails()[0].points().iter().all(|p| p.rs_ratio() > 100.0));
//! ```

mod cadence;
mod chart;
mod mean_window;
mod price_table;
mod quadrant;
mod quote;
mod rrg;
mod universe;
mod viewport;

pub use crate::cadence::Cadence;
pub use crate::chart::{
    ChartConfig, ChartError, InstrumentTrail, RrgChart, TrailPoint, build_chart,
};
pub use crate::price_table::{PriceTable, PriceTableBuilder};
pub use crate::quadrant::Quadrant;
pub use crate::quote::{Price, Quote, Timestamp};
pub use crate::rrg::{Rrg, RrgConfig, RrgConfigBuilder, RrgPoint, RrgSeries, compute_rrg};
pub use crate::universe::{Basket, Instrument, LabelStyle, UniverseSelection};
pub use crate::viewport::{Viewport, ViewportConfig, compute_viewport, trail};

#[cfg(test)]
mod test_util;
