//! # Stockview Core
//!
//! Screens and data access for browsing the Alpha Vantage listing and the
//! recent daily prices of a selected symbol.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Alpha Vantage adapter and bundled sample payloads |
//! | [`app`] | Root navigation between the two screens |
//! | [`config`] | API key, base URL and timeout |
//! | [`data_source`] | Data source trait and its error type |
//! | [`domain`] | Symbol, listing and daily price models |
//! | [`envelope`] | JSON output envelope |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`i18n`] | Localized messages |
//! | [`screens`] | Listing and details screen state machines |
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐  select(symbol)  ┌────────────────┐
//! │ ListScreen   │ ───────────────▶ │ DetailsScreen  │
//! │ LISTING_     │ ◀─────────────── │ TIME_SERIES_   │
//! │ STATUS (csv) │     go_back()    │ DAILY (json)   │
//! └──────┬───────┘                  └───────┬────────┘
//!        │          ┌──────────────┐        │
//!        └────────▶ │ DataSource   │ ◀──────┘
//!                   │ HttpClient   │
//!                   └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockview_core::{AlphaVantageAdapter, ApiConfig, App, Route};
//!
//! let adapter = AlphaVantageAdapter::new(ApiConfig::from_env()?);
//! let mut app = App::new();
//! app.load(&adapter).await;
//! if let Route::List(list) = app.route() {
//!     println!("{} symbols", list.records().len());
//! }
//! ```

pub mod adapters;
pub mod app;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod i18n;
pub mod screens;

pub use adapters::AlphaVantageAdapter;

pub use app::{Action, App, Route};

pub use config::ApiConfig;

pub use data_source::{DailySeriesRequest, DataSource, SourceError, SourceErrorKind};

pub use domain::{DailyPriceEntry, DailySeries, Listing, Symbol, SymbolRecord};

pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};

pub use error::{CoreError, ValidationError};

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};

pub use i18n::{Locale, Message};

pub use screens::{DetailsScreen, ListScreen, LoadState, ScreenFailure, RECENT_ENTRIES};
