//! Data source trait and its error type.
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | Listing | — | [`Listing`] |
//! | Daily series | [`DailySeriesRequest`] | [`DailySeries`] |

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{DailySeries, Listing, Symbol, ValidationError};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// The request never produced a response.
    Transport,
    /// The upstream answered with a non-2xx status.
    UpstreamStatus,
    /// The body was not the expected payload.
    InvalidPayload,
    /// The upstream answered with a throttling notice instead of data.
    RateLimited,
}

/// Structured error returned by a [`DataSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Transport, message)
    }

    pub fn upstream_status(status: u16) -> Self {
        Self::new(
            SourceErrorKind::UpstreamStatus,
            format!("upstream returned status {status}"),
        )
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::InvalidPayload, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::RateLimited, message)
    }

    fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the request failed before a usable HTTP response arrived.
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(
            self.kind,
            SourceErrorKind::Transport | SourceErrorKind::UpstreamStatus
        )
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Transport => "source.transport",
            SourceErrorKind::UpstreamStatus => "source.upstream_status",
            SourceErrorKind::InvalidPayload => "source.invalid_payload",
            SourceErrorKind::RateLimited => "source.rate_limited",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Request payload for the daily series endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySeriesRequest {
    pub symbol: Symbol,
    /// Number of leading (most recent) entries to decode.
    pub limit: usize,
}

impl DailySeriesRequest {
    pub fn new(symbol: Symbol, limit: usize) -> Result<Self, ValidationError> {
        if limit == 0 {
            return Err(ValidationError::ZeroLimit);
        }
        Ok(Self { symbol, limit })
    }
}

/// Market data contract behind the listing and details screens.
pub trait DataSource: Send + Sync {
    /// Short provider name used in envelopes and logs.
    fn name(&self) -> &'static str;

    /// Fetches every listed symbol.
    ///
    /// An empty listing is not an error; the caller decides how to present it.
    fn listing<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Listing, SourceError>> + Send + 'a>>;

    /// Fetches up to `req.limit` daily entries, most recent day first.
    fn daily_series<'a>(
        &'a self,
        req: DailySeriesRequest,
    ) -> Pin<Box<dyn Future<Output = Result<DailySeries, SourceError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failures_cover_transport_and_status() {
        assert!(SourceError::transport("connection refused").is_fetch_failure());
        assert!(SourceError::upstream_status(503).is_fetch_failure());
        assert!(!SourceError::invalid_payload("no header").is_fetch_failure());
        assert!(!SourceError::rate_limited("slow down").is_fetch_failure());
    }

    #[test]
    fn daily_request_requires_positive_limit() {
        let symbol = Symbol::parse("IBM").expect("valid symbol");
        assert_eq!(
            DailySeriesRequest::new(symbol.clone(), 0),
            Err(ValidationError::ZeroLimit)
        );
        assert!(DailySeriesRequest::new(symbol, 5).is_ok());
    }

    #[test]
    fn display_includes_code() {
        let error = SourceError::upstream_status(500);
        assert_eq!(
            error.to_string(),
            "upstream returned status 500 (source.upstream_status)"
        );
    }
}
