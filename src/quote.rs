/// A price or oscillator value.
///
/// Semantic alias for [`f64`]; documents intent in signatures without
/// newtype ceremony. Missing or undefined values are represented as
/// [`f64::NAN`], never as a separate sentinel.
pub type Price = f64;

/// Observation timestamp in milliseconds since the Unix epoch.
///
/// Used for row alignment across instruments and for weekly bucketing.
/// Must be strictly increasing within one instrument's series.
pub type Timestamp = u64;

/// A single closing-price observation, the input to the RRG pipeline.
///
/// Implement this on the row type your market-data source produces to
/// feed a [`PriceTableBuilder`](crate::PriceTableBuilder) without
/// per-row conversion.
///
/// # Example
///
/// ```
/// use rrg_ta::{Price, Quote, Timestamp};
///
/// struct DailyClose {
///     ts: u64,
///     close: f64,
/// }
///
/// impl Quote for DailyClose {
///     fn close(&self) -> Price { self.close }
///     fn timestamp(&self) -> Timestamp { self.ts }
/// }
/// ```
pub trait Quote {
    /// Closing price of the observation.
    ///
    /// May be [`f64::NAN`] for a date on which the instrument did not
    /// trade; NaN values flow through the pipeline as undefined points.
    fn close(&self) -> Price;

    /// Observation timestamp in epoch milliseconds.
    ///
    /// Must be strictly increasing between consecutive observations of
    /// the same instrument.
    fn timestamp(&self) -> Timestamp;
}
