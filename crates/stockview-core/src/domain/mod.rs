//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated ticker |
//! | [`SymbolRecord`] | One row of the listing |
//! | [`Listing`] | Listing rows in upstream order |
//! | [`DailyPriceEntry`] | One trading day (open/high/low/close) |
//! | [`DailySeries`] | Daily entries for one symbol |

mod daily;
mod listing;
mod symbol;

pub use daily::{DailyPriceEntry, DailySeries};
pub use listing::{Listing, SymbolRecord};
pub use symbol::Symbol;
