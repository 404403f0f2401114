pub mod alphavantage;
pub mod fixtures;

pub use alphavantage::AlphaVantageAdapter;
