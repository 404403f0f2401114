use crate::data_source::{DataSource, SourceError};
use crate::i18n::Message;
use crate::{Listing, Symbol, SymbolRecord};

use super::{LoadState, ScreenFailure};

/// The listing screen: every tradable symbol, selectable by row or ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListScreen {
    state: LoadState<Listing>,
}

impl ListScreen {
    pub const fn new() -> Self {
        Self {
            state: LoadState::Loading,
        }
    }

    pub const fn state(&self) -> &LoadState<Listing> {
        &self.state
    }

    /// Loaded records, empty while loading or after a failure.
    pub fn records(&self) -> &[SymbolRecord] {
        self.state
            .loaded()
            .map(|listing| listing.records.as_slice())
            .unwrap_or_default()
    }

    /// Issues the listing request unless the screen has already settled.
    pub async fn load(&mut self, source: &dyn DataSource) {
        if !self.state.is_loading() {
            return;
        }
        let result = source.listing().await;
        self.apply(result);
    }

    /// Settles the screen from a listing response.
    pub fn apply(&mut self, result: Result<Listing, SourceError>) {
        self.state = match result {
            Ok(listing) if listing.is_empty() => {
                LoadState::Failed(ScreenFailure::new(Message::ListingEmpty))
            }
            Ok(listing) => LoadState::Loaded(listing),
            Err(error) if error.is_fetch_failure() => {
                LoadState::Failed(ScreenFailure::caused_by(Message::ListingFetchFailed, error))
            }
            Err(error) => LoadState::Failed(ScreenFailure::caused_by(
                Message::ListingInvalidResponse,
                error,
            )),
        };
    }

    /// Resolves user input to a listed symbol.
    ///
    /// A number picks the row at that 1-based position; anything else is
    /// matched against the listed tickers. The error is the message to show
    /// instead: the input matched no row, or the row's ticker cannot be requested.
    pub fn resolve(&self, input: &str) -> Result<Symbol, Message> {
        let input = input.trim();
        let record = match input.parse::<usize>() {
            Ok(position) => position
                .checked_sub(1)
                .and_then(|index| self.records().get(index)),
            Err(_) => self.state.loaded().and_then(|listing| listing.find(input)),
        }
        .ok_or(Message::UnknownSelection)?;

        record.ticker().map_err(|error| {
            tracing::warn!(symbol = %record.symbol, %error, "listed symbol cannot be requested");
            Message::UnsupportedSymbol
        })
    }
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(symbols: &[&str]) -> Listing {
        Listing::new(
            symbols
                .iter()
                .map(|symbol| SymbolRecord::new(*symbol, format!("{symbol} Corp")).expect("record"))
                .collect(),
        )
    }

    #[test]
    fn empty_listing_fails_with_empty_message() {
        let mut screen = ListScreen::new();
        screen.apply(Ok(Listing::default()));

        let failure = screen.state().failure().expect("failed");
        assert_eq!(failure.message, Message::ListingEmpty);
        assert!(failure.cause.is_none());
        assert!(screen.records().is_empty());
    }

    #[test]
    fn errors_map_to_fetch_or_invalid_messages() {
        let mut screen = ListScreen::new();
        screen.apply(Err(SourceError::transport("offline")));
        assert_eq!(
            screen.state().failure().map(|f| f.message),
            Some(Message::ListingFetchFailed)
        );

        let mut screen = ListScreen::new();
        screen.apply(Err(SourceError::rate_limited("25 requests per day")));
        assert_eq!(
            screen.state().failure().map(|f| f.message),
            Some(Message::ListingInvalidResponse)
        );
    }

    #[test]
    fn resolves_by_position_or_ticker() {
        let mut screen = ListScreen::new();
        screen.apply(Ok(listing(&["A", "IBM", "MSFT"])));

        assert_eq!(screen.resolve("2").map(String::from), Ok(String::from("IBM")));
        assert_eq!(screen.resolve(" msft ").map(String::from), Ok(String::from("MSFT")));
        assert_eq!(screen.resolve("0"), Err(Message::UnknownSelection));
        assert_eq!(screen.resolve("4"), Err(Message::UnknownSelection));
        assert_eq!(screen.resolve("GOOG"), Err(Message::UnknownSelection));
    }

    #[test]
    fn listed_tickers_that_cannot_be_requested_get_their_own_message() {
        let mut screen = ListScreen::new();
        screen.apply(Ok(listing(&["IBM", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"])));

        assert_eq!(screen.resolve("2"), Err(Message::UnsupportedSymbol));
        assert_eq!(
            screen.resolve("abcdefghijklmnopqrstuvwxyz"),
            Err(Message::UnsupportedSymbol)
        );
    }

    #[test]
    fn nothing_resolves_before_loading() {
        assert_eq!(ListScreen::new().resolve("1"), Err(Message::UnknownSelection));
    }
}
