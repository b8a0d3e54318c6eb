#![allow(dead_code)]

use rrg_ta::{Price, PriceTable, Quote, Timestamp};
use serde::Deserialize;

/// One close observation parsed from the fixture CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefClose {
    pub timestamp: u64,
    pub ticker: String,
    pub close: f64,
}

impl Quote for RefClose {
    fn close(&self) -> Price {
        self.close
    }

    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

const CLOSES_PATH: &str = "tests/fixtures/data/daily-closes.csv";

/// Loads the synthetic daily close table: SPY plus five sector ETFs
/// over 320 consecutive weekdays, deterministic seeded walk.
pub fn load_fixture_table() -> PriceTable {
    let mut rdr = csv::Reader::from_path(CLOSES_PATH)
        .unwrap_or_else(|e| panic!("failed to open {CLOSES_PATH}: {e}"));

    let mut builder = PriceTable::builder();
    for record in rdr.deserialize() {
        let row: RefClose = record.expect("invalid close record");
        builder.push(&row.ticker, &row);
    }

    builder.build()
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}
