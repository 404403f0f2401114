use serde::{Deserialize, Serialize};

use crate::{Symbol, ValidationError};

/// One tradable instrument from the listing payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRecord {
    pub symbol: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl SymbolRecord {
    /// Builds a record, returning `None` when either the symbol or the name is blank.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let symbol = symbol.into();
        let name = name.into();
        if symbol.trim().is_empty() || name.trim().is_empty() {
            return None;
        }

        Some(Self {
            symbol,
            name,
            exchange: None,
            asset_type: None,
            status: None,
        })
    }

    pub fn with_exchange(mut self, exchange: Option<String>) -> Self {
        self.exchange = non_blank(exchange);
        self
    }

    pub fn with_asset_type(mut self, asset_type: Option<String>) -> Self {
        self.asset_type = non_blank(asset_type);
        self
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = non_blank(status);
        self
    }

    /// The record's symbol as a validated ticker for the details lookup.
    pub fn ticker(&self) -> Result<Symbol, ValidationError> {
        Symbol::parse(&self.symbol)
    }
}

/// Symbol records in the order the upstream listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub records: Vec<SymbolRecord>,
}

impl Listing {
    pub fn new(records: Vec<SymbolRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a record by symbol, ignoring ASCII case.
    pub fn find(&self, symbol: &str) -> Option<&SymbolRecord> {
        let wanted = symbol.trim();
        self.records
            .iter()
            .find(|record| record.symbol.eq_ignore_ascii_case(wanted))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
