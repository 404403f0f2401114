//! Root navigation: the selected symbol decides which screen is active.

use crate::data_source::DataSource;
use crate::screens::{DetailsScreen, ListScreen};
use crate::Symbol;

/// The active screen. Only the active screen's state is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List(ListScreen),
    Details(DetailsScreen),
}

/// Navigation intents raised by the screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select(Symbol),
    GoBack,
}

/// Root component holding the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    route: Route,
}

impl App {
    /// Starts on the listing screen with nothing selected.
    pub const fn new() -> Self {
        Self {
            route: Route::List(ListScreen::new()),
        }
    }

    /// Starts on the details screen for `symbol`.
    pub const fn with_selection(symbol: Symbol) -> Self {
        Self {
            route: Route::Details(DetailsScreen::new(symbol)),
        }
    }

    pub const fn route(&self) -> &Route {
        &self.route
    }

    pub const fn selected_symbol(&self) -> Option<&Symbol> {
        match &self.route {
            Route::List(_) => None,
            Route::Details(details) => Some(details.symbol()),
        }
    }

    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Select(symbol) => self.select(symbol),
            Action::GoBack => self.go_back(),
        }
    }

    /// Shows the details screen for `symbol`; re-selecting the current symbol keeps its state.
    pub fn select(&mut self, symbol: Symbol) {
        if self.selected_symbol() == Some(&symbol) {
            return;
        }
        tracing::debug!(symbol = symbol.as_str(), "showing details");
        self.route = Route::Details(DetailsScreen::new(symbol));
    }

    /// Returns to a fresh listing screen; the previous listing was discarded on selection.
    pub fn go_back(&mut self) {
        if matches!(self.route, Route::List(_)) {
            return;
        }
        tracing::debug!("showing listing");
        self.route = Route::List(ListScreen::new());
    }

    /// Loads the active screen if it has not issued its request yet.
    pub async fn load(&mut self, source: &dyn DataSource) {
        match &mut self.route {
            Route::List(list) => list.load(source).await,
            Route::Details(details) => details.load(source).await,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
