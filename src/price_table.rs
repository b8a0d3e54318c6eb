use crate::{Price, Quote, Timestamp};

use std::collections::{BTreeMap, BTreeSet};

const MS_PER_DAY: u64 = 86_400_000;

/// Week bucket ending on Friday: epoch day 0 is a Thursday, so
/// shifting by 5 days puts the bucket boundary on Saturday.
fn week_bucket(timestamp: Timestamp) -> u64 {
    (timestamp / MS_PER_DAY + 5) / 7
}

/// Request-scoped table of closing prices, one column per instrument,
/// aligned on the sorted union of all observation timestamps.
///
/// Rows where an instrument has no observation hold [`f64::NAN`]; a
/// ticker that was never pushed simply has no column. The table is
/// read-only once built — the pipeline recomputes everything from a
/// fresh table on each request.
#[derive(Clone, Debug, Default)]
pub struct PriceTable {
    timestamps: Vec<Timestamp>,
    columns: BTreeMap<String, Vec<Price>>,
}

impl PriceTable {
    /// Returns a new builder.
    #[must_use]
    pub fn builder() -> PriceTableBuilder {
        PriceTableBuilder::default()
    }

    /// Row timestamps, sorted ascending without duplicates.
    #[must_use]
    pub fn timestamps(&self) -> &[Timestamp] {
        &self.timestamps
    }

    /// Tickers with a column in this table, in sorted order.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// The close column for `ticker`, aligned with
    /// [`timestamps`](Self::timestamps), or `None` if the ticker was
    /// never pushed.
    #[must_use]
    pub fn column(&self, ticker: &str) -> Option<&[Price]> {
        self.columns.get(ticker).map(Vec::as_slice)
    }

    /// `true` when `ticker` has at least one finite close.
    #[must_use]
    pub fn has_data(&self, ticker: &str) -> bool {
        self.column(ticker)
            .is_some_and(|col| col.iter().any(|v| v.is_finite()))
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// `true` when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Resamples daily rows into week-ending-Friday bars.
    ///
    /// Each output row keeps the timestamp of the last input row in
    /// its week and, per column, the last finite close of that week
    /// (NaN when the instrument did not trade all week).
    #[must_use]
    pub fn resample_weekly(&self) -> PriceTable {
        let mut timestamps = Vec::new();
        let mut columns: BTreeMap<String, Vec<Price>> = self
            .columns
            .keys()
            .map(|ticker| (ticker.clone(), Vec::new()))
            .collect();

        let mut start = 0;
        for (i, &ts) in self.timestamps.iter().enumerate() {
            let last_of_week = self
                .timestamps
                .get(i + 1)
                .is_none_or(|&next| week_bucket(next) != week_bucket(ts));

            if last_of_week {
                timestamps.push(ts);
                for (ticker, column) in &self.columns {
                    let close = column[start..=i]
                        .iter()
                        .rev()
                        .copied()
                        .find(|v| v.is_finite())
                        .unwrap_or(f64::NAN);
                    columns
                        .get_mut(ticker)
                        .expect("resampled columns mirror source columns")
                        .push(close);
                }
                start = i + 1;
            }
        }

        PriceTable {
            timestamps,
            columns,
        }
    }
}

/// Builder for [`PriceTable`].
///
/// Collects per-ticker observations in any interleaving, then aligns
/// all columns on the union of timestamps at
/// [`build`](PriceTableBuilder::build). Duplicate timestamps for one
/// ticker keep the last pushed value.
#[derive(Debug, Default)]
pub struct PriceTableBuilder {
    series: BTreeMap<String, Vec<(Timestamp, Price)>>,
}

impl PriceTableBuilder {
    /// Adds one observation from a [`Quote`] row.
    pub fn push(&mut self, ticker: &str, quote: &impl Quote) -> &mut Self {
        self.push_close(ticker, quote.timestamp(), quote.close())
    }

    /// Adds one raw (timestamp, close) observation.
    pub fn push_close(&mut self, ticker: &str, timestamp: Timestamp, close: Price) -> &mut Self {
        self.series
            .entry(ticker.to_owned())
            .or_default()
            .push((timestamp, close));
        self
    }

    /// Aligns all collected series into a [`PriceTable`].
    #[must_use]
    pub fn build(&self) -> PriceTable {
        let timestamps: Vec<Timestamp> = self
            .series
            .values()
            .flat_map(|obs| obs.iter().map(|&(ts, _)| ts))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let columns = self
            .series
            .iter()
            .map(|(ticker, observations)| {
                let mut sorted = observations.clone();
                sorted.sort_by_key(|&(ts, _)| ts);

                let mut column = vec![f64::NAN; timestamps.len()];
                let mut row = 0;
                for (ts, close) in sorted {
                    while timestamps[row] != ts {
                        row += 1;
                    }
                    column[row] = close;
                }

                (ticker.clone(), column)
            })
            .collect();

        PriceTable {
            timestamps,
            columns,
        }
    }
}
