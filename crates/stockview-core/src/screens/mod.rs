//! Screen state machines.
//!
//! A screen starts in [`LoadState::Loading`], issues exactly one request when
//! it is loaded, and settles in either [`LoadState::Failed`] or
//! [`LoadState::Loaded`]. Settled screens never fetch again; a fresh screen is
//! created instead.

mod details;
mod list;

pub use details::{DetailsScreen, RECENT_ENTRIES};
pub use list::ListScreen;

use serde::Serialize;

use crate::data_source::SourceError;
use crate::i18n::Message;

/// Lifecycle of a screen's single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Failed(ScreenFailure),
    Loaded(T),
}

impl<T> LoadState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn failure(&self) -> Option<&ScreenFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// What a failed screen shows, plus the upstream error behind it when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenFailure {
    pub message: Message,
    #[serde(skip)]
    pub cause: Option<SourceError>,
}

impl ScreenFailure {
    pub const fn new(message: Message) -> Self {
        Self {
            message,
            cause: None,
        }
    }

    pub fn caused_by(message: Message, cause: SourceError) -> Self {
        Self {
            message,
            cause: Some(cause),
        }
    }
}
