use serde::{Deserialize, Serialize};

use crate::Symbol;

/// One trading day of a daily time series.
///
/// Fields are kept as the upstream published them; a field the upstream left out is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPriceEntry {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
}

impl DailyPriceEntry {
    pub fn new(
        date: impl Into<String>,
        open: impl Into<String>,
        high: impl Into<String>,
        low: impl Into<String>,
        close: impl Into<String>,
        volume: Option<String>,
    ) -> Self {
        Self {
            date: date.into(),
            open: open.into(),
            high: high.into(),
            low: low.into(),
            close: close.into(),
            volume,
        }
    }
}

/// Daily entries for one symbol, in the order the upstream returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeries {
    pub symbol: Symbol,
    pub entries: Vec<DailyPriceEntry>,
}

impl DailySeries {
    pub fn new(symbol: Symbol, entries: Vec<DailyPriceEntry>) -> Self {
        Self { symbol, entries }
    }

    /// The leading `count` entries; for Alpha Vantage these are the most recent days.
    pub fn most_recent(&self, count: usize) -> &[DailyPriceEntry] {
        let end = count.min(self.entries.len());
        &self.entries[..end]
    }
}
