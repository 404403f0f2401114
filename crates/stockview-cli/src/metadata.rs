use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use stockview_core::{EnvelopeMeta, Locale, ValidationError};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

pub const SCHEMA_VERSION: &str = "v1.0.0";

/// Request identifier (UUID v4) for one rendered screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Command metadata used to construct envelope metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub request_id: RequestId,
    pub source: &'static str,
    pub locale: Locale,
    pub latency_ms: u64,
}

impl Metadata {
    pub fn new(source: &'static str, locale: Locale, latency_ms: u64) -> Self {
        Self {
            request_id: RequestId::new_v4(),
            source,
            locale,
            latency_ms,
        }
    }

    pub fn into_envelope_meta(self) -> Result<EnvelopeMeta, ValidationError> {
        let generated_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("<unformattable>"));

        let meta = EnvelopeMeta {
            request_id: self.request_id.to_string(),
            schema_version: String::from(SCHEMA_VERSION),
            generated_at,
            source: self.source.to_owned(),
            locale: self.locale.as_str().to_owned(),
            latency_ms: self.latency_ms,
        };
        meta.validate_schema_compliance()?;
        Ok(meta)
    }
}
