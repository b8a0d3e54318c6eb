use crate::chart::ChartError;

use std::fmt::Display;

/// How an instrument is labelled in the legend and next to its marker
/// on the chart.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum LabelStyle {
    /// Legend and chart both show the raw ticker.
    #[default]
    Ticker,
    /// Legend shows the raw ticker; the chart marker drops the
    /// exchange suffix (`0700.HK` plots as `0700`).
    TrimmedTicker,
    /// Legend shows `TICKER (Name)`; the chart marker shows the name.
    Name,
}

/// One tradeable instrument: a ticker plus a human-readable name.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Instrument {
    ticker: String,
    name: String,
}

impl Instrument {
    /// Creates an instrument.
    #[must_use]
    pub fn new(ticker: &str, name: &str) -> Self {
        Self {
            ticker: ticker.to_owned(),
            name: name.to_owned(),
        }
    }

    /// The data-source ticker.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Legend entry under the given style.
    #[must_use]
    pub fn legend_label(&self, style: LabelStyle) -> String {
        match style {
            LabelStyle::Ticker | LabelStyle::TrimmedTicker => self.ticker.clone(),
            LabelStyle::Name => format!("{} ({})", self.ticker, self.name),
        }
    }

    /// Marker label on the chart under the given style.
    #[must_use]
    pub fn chart_label(&self, style: LabelStyle) -> String {
        match style {
            LabelStyle::Ticker => self.ticker.clone(),
            LabelStyle::TrimmedTicker => self
                .ticker
                .split_once('.')
                .map_or_else(|| self.ticker.clone(), |(base, _)| base.to_owned()),
            LabelStyle::Name => self.name.clone(),
        }
    }
}

impl Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.ticker, self.name)
    }
}

/// A basket definition: the benchmark, the tracked members, and how
/// to label them.
///
/// Baskets are plain data — every universe the tool offers is one of
/// these, so adding a universe means adding a definition, not a code
/// path.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Basket {
    title: String,
    benchmark: Instrument,
    members: Vec<Instrument>,
    label_style: LabelStyle,
}

impl Basket {
    /// S&P 500 sector ETFs against SPY.
    #[must_use]
    pub fn us_sectors() -> Self {
        Self {
            title: "S&P 500 Sectors".to_owned(),
            benchmark: Instrument::new("SPY", "S&P 500"),
            members: vec![
                Instrument::new("XLB", "Materials"),
                Instrument::new("XLC", "Communication Services"),
                Instrument::new("XLE", "Energy"),
                Instrument::new("XLF", "Financials"),
                Instrument::new("XLI", "Industrials"),
                Instrument::new("XLK", "Technology"),
                Instrument::new("XLP", "Consumer Staples"),
                Instrument::new("XLRE", "Real Estate"),
                Instrument::new("XLU", "Utilities"),
                Instrument::new("XLV", "Health Care"),
                Instrument::new("XLY", "Consumer Discretionary"),
            ],
            label_style: LabelStyle::Ticker,
        }
    }

    /// Large-cap Hang Seng constituents against the index. Chart
    /// markers drop the `.HK` suffix.
    #[must_use]
    pub fn hk_sub_indexes() -> Self {
        Self {
            title: "Hang Seng Sub-indexes".to_owned(),
            benchmark: Instrument::new("^HSI", "Hang Seng Index"),
            members: vec![
                Instrument::new("0001.HK", "CK Hutchison"),
                Instrument::new("0002.HK", "CLP Holdings"),
                Instrument::new("0005.HK", "HSBC Holdings"),
                Instrument::new("0016.HK", "Sun Hung Kai Properties"),
                Instrument::new("0388.HK", "HKEX"),
                Instrument::new("0700.HK", "Tencent"),
                Instrument::new("0883.HK", "CNOOC"),
                Instrument::new("0939.HK", "China Construction Bank"),
                Instrument::new("0941.HK", "China Mobile"),
                Instrument::new("1211.HK", "BYD"),
                Instrument::new("1299.HK", "AIA Group"),
            ],
            label_style: LabelStyle::TrimmedTicker,
        }
    }

    /// Country index ETFs against ACWI. Chart markers show country
    /// names.
    #[must_use]
    pub fn world_indices() -> Self {
        Self {
            title: "World Indices".to_owned(),
            benchmark: Instrument::new("ACWI", "MSCI World"),
            members: vec![
                Instrument::new("SPY", "United States"),
                Instrument::new("EWJ", "Japan"),
                Instrument::new("EWG", "Germany"),
                Instrument::new("EWU", "United Kingdom"),
                Instrument::new("EWQ", "France"),
                Instrument::new("EWC", "Canada"),
                Instrument::new("EWA", "Australia"),
                Instrument::new("EWY", "South Korea"),
                Instrument::new("EWT", "Taiwan"),
                Instrument::new("EWZ", "Brazil"),
                Instrument::new("FXI", "China"),
                Instrument::new("INDA", "India"),
            ],
            label_style: LabelStyle::Name,
        }
    }

    /// A user-defined basket of tickers against a chosen benchmark.
    ///
    /// # Errors
    ///
    /// [`ChartError::EmptyUniverse`] when `tickers` is empty,
    /// [`ChartError::DuplicateBenchmark`] when the benchmark also
    /// appears among the members.
    pub fn custom(benchmark: &str, tickers: &[&str]) -> Result<Self, ChartError> {
        if tickers.is_empty() {
            return Err(ChartError::EmptyUniverse);
        }
        if tickers.contains(&benchmark) {
            return Err(ChartError::DuplicateBenchmark(benchmark.to_owned()));
        }

        Ok(Self {
            title: "Custom Basket".to_owned(),
            benchmark: Instrument::new(benchmark, benchmark),
            members: tickers
                .iter()
                .map(|ticker| Instrument::new(ticker, ticker))
                .collect(),
            label_style: LabelStyle::Ticker,
        })
    }

    /// Basket title for the chart heading.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The benchmark every member is measured against.
    #[must_use]
    pub fn benchmark(&self) -> &Instrument {
        &self.benchmark
    }

    /// Tracked members, excluding the benchmark.
    #[must_use]
    pub fn members(&self) -> &[Instrument] {
        &self.members
    }

    /// Label style for this basket.
    #[must_use]
    pub fn label_style(&self) -> LabelStyle {
        self.label_style
    }
}

impl Display for Basket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vs {} ({} members)",
            self.title,
            self.benchmark.ticker(),
            self.members.len()
        )
    }
}

/// The user's universe choice: exactly one of the predefined baskets,
/// or a custom list.
///
/// A single enumerated value replaces a set of mutually exclusive
/// toggles; resolution to a [`Basket`] validates the custom variant.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum UniverseSelection {
    /// S&P 500 sector ETFs vs SPY.
    UsSectors,
    /// Hang Seng constituents vs ^HSI.
    HkSubIndexes,
    /// Country ETFs vs ACWI.
    WorldIndices,
    /// User-entered tickers vs a chosen benchmark.
    Custom {
        /// Benchmark ticker.
        benchmark: String,
        /// Member tickers.
        tickers: Vec<String>,
    },
}

impl UniverseSelection {
    /// Resolves the selection into a basket definition.
    ///
    /// # Errors
    ///
    /// See [`Basket::custom`] for the custom-variant validation.
    pub fn basket(&self) -> Result<Basket, ChartError> {
        match self {
            Self::UsSectors => Ok(Basket::us_sectors()),
            Self::HkSubIndexes => Ok(Basket::hk_sub_indexes()),
            Self::WorldIndices => Ok(Basket::world_indices()),
            Self::Custom { benchmark, tickers } => {
                let tickers: Vec<&str> = tickers.iter().map(String::as_str).collect();
                Basket::custom(benchmark, &tickers)
            }
        }
    }
}
