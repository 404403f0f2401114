use crate::data_source::{DailySeriesRequest, DataSource, SourceError};
use crate::i18n::Message;
use crate::{DailyPriceEntry, DailySeries, Symbol};

use super::{LoadState, ScreenFailure};

/// Number of most recent trading days shown on the details screen.
pub const RECENT_ENTRIES: usize = 5;

/// The details screen: recent daily prices for one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsScreen {
    symbol: Symbol,
    state: LoadState<DailySeries>,
}

impl DetailsScreen {
    pub const fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            state: LoadState::Loading,
        }
    }

    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub const fn state(&self) -> &LoadState<DailySeries> {
        &self.state
    }

    /// Displayed entries, most recent first, at most [`RECENT_ENTRIES`].
    pub fn entries(&self) -> &[DailyPriceEntry] {
        self.state
            .loaded()
            .map(|series| series.most_recent(RECENT_ENTRIES))
            .unwrap_or_default()
    }

    /// Issues the daily series request unless the screen has already settled.
    pub async fn load(&mut self, source: &dyn DataSource) {
        if !self.state.is_loading() {
            return;
        }
        let request = DailySeriesRequest {
            symbol: self.symbol.clone(),
            limit: RECENT_ENTRIES,
        };
        let result = source.daily_series(request).await;
        self.apply(result);
    }

    /// Settles the screen from a daily series response.
    pub fn apply(&mut self, result: Result<DailySeries, SourceError>) {
        self.state = match result {
            Ok(mut series) => {
                series.entries.truncate(RECENT_ENTRIES);
                LoadState::Loaded(series)
            }
            Err(error) if error.is_fetch_failure() => {
                LoadState::Failed(ScreenFailure::caused_by(Message::DetailsFetchFailed, error))
            }
            Err(error) => {
                LoadState::Failed(ScreenFailure::caused_by(Message::DetailsUnavailable, error))
            }
        };
    }
}
