use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde_json::{Map, Value};

use crate::config::ApiConfig;
use crate::data_source::{DailySeriesRequest, DataSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{DailyPriceEntry, DailySeries, Listing, SymbolRecord};

const LISTING_FUNCTION: &str = "LISTING_STATUS";
const DAILY_FUNCTION: &str = "TIME_SERIES_DAILY";

/// A listing body is only trusted when its header row is present.
const LISTING_HEADER_MARKER: &str = "symbol,";
const DAILY_SERIES_KEY: &str = "Time Series (Daily)";

/// Alpha Vantage adapter for the `LISTING_STATUS` and `TIME_SERIES_DAILY` functions.
#[derive(Clone)]
pub struct AlphaVantageAdapter {
    http_client: Arc<dyn HttpClient>,
    config: ApiConfig,
}

impl AlphaVantageAdapter {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: ApiConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn fetch(
        &self,
        params: &[(&str, &str)],
        accept: &str,
    ) -> Result<String, SourceError> {
        let endpoint = self.config.query_url(params);
        let request = HttpRequest::get(endpoint)
            .with_header("accept", accept)
            .with_timeout_ms(self.config.timeout_ms());

        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::transport(format!("alphavantage transport error: {}", e.message()))
        })?;

        if !response.is_success() {
            return Err(SourceError::upstream_status(response.status));
        }

        Ok(response.body)
    }

    async fn fetch_listing(&self) -> Result<Listing, SourceError> {
        tracing::debug!(function = LISTING_FUNCTION, "requesting listing");
        let body = self
            .fetch(&[("function", LISTING_FUNCTION)], "text/csv")
            .await?;

        let listing = parse_listing(&body).inspect_err(log_payload_error)?;
        tracing::debug!(records = listing.len(), "listing parsed");
        Ok(listing)
    }

    async fn fetch_daily_series(&self, req: DailySeriesRequest) -> Result<DailySeries, SourceError> {
        tracing::debug!(
            function = DAILY_FUNCTION,
            symbol = req.symbol.as_str(),
            "requesting daily series"
        );
        let body = self
            .fetch(
                &[("function", DAILY_FUNCTION), ("symbol", req.symbol.as_str())],
                "application/json",
            )
            .await?;

        let entries = parse_daily_entries(&body, req.limit).inspect_err(log_payload_error)?;
        Ok(DailySeries::new(req.symbol, entries))
    }
}

impl DataSource for AlphaVantageAdapter {
    fn name(&self) -> &'static str {
        "alphavantage"
    }

    fn listing<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Listing, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch_listing())
    }

    fn daily_series<'a>(
        &'a self,
        req: DailySeriesRequest,
    ) -> Pin<Box<dyn Future<Output = Result<DailySeries, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch_daily_series(req))
    }
}

const OPEN_FIELD: &str = "1. open";
const HIGH_FIELD: &str = "2. high";
const LOW_FIELD: &str = "3. low";
const CLOSE_FIELD: &str = "4. close";
const VOLUME_FIELD: &str = "5. volume";

/// Parses a `LISTING_STATUS` CSV body, dropping rows without a symbol or a name.
pub(crate) fn parse_listing(body: &str) -> Result<Listing, SourceError> {
    if !body.contains(LISTING_HEADER_MARKER) {
        return Err(unexpected_body(body, "listing response has no csv header row"));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| SourceError::invalid_payload(format!("unreadable listing header: {e}")))?
        .clone();
    let columns = ListingColumns::locate(&headers);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row
            .map_err(|e| SourceError::invalid_payload(format!("unreadable listing row: {e}")))?;
        if let Some(record) = columns.record(&row) {
            records.push(record);
        }
    }

    Ok(Listing::new(records))
}

/// Header positions of the listing columns; missing columns read as empty cells.
struct ListingColumns {
    symbol: Option<usize>,
    name: Option<usize>,
    exchange: Option<usize>,
    asset_type: Option<usize>,
    status: Option<usize>,
}

impl ListingColumns {
    fn locate(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|header| header == name);
        Self {
            symbol: position("symbol"),
            name: position("name"),
            exchange: position("exchange"),
            asset_type: position("assetType"),
            status: position("status"),
        }
    }

    fn record(&self, row: &StringRecord) -> Option<SymbolRecord> {
        let cell = |index: Option<usize>| index.and_then(|index| row.get(index)).map(str::to_owned);

        let record = SymbolRecord::new(cell(self.symbol)?, cell(self.name)?)?;
        Some(
            record
                .with_exchange(cell(self.exchange))
                .with_asset_type(cell(self.asset_type))
                .with_status(cell(self.status)),
        )
    }
}

/// Decodes the leading `limit` entries of a `TIME_SERIES_DAILY` body in upstream order.
pub(crate) fn parse_daily_entries(
    body: &str,
    limit: usize,
) -> Result<Vec<DailyPriceEntry>, SourceError> {
    let payload = serde_json::from_str::<Value>(body).map_err(|e| {
        SourceError::invalid_payload(format!("daily series response is not json: {e}"))
    })?;

    let Some(series) = payload.get(DAILY_SERIES_KEY).and_then(Value::as_object) else {
        return Err(unexpected_body(
            body,
            &format!("daily series response has no '{DAILY_SERIES_KEY}' object"),
        ));
    };

    let entries = series
        .iter()
        .take(limit)
        .map(|(date, bar)| {
            DailyPriceEntry::new(
                date.as_str(),
                bar_field(bar, OPEN_FIELD).unwrap_or_default(),
                bar_field(bar, HIGH_FIELD).unwrap_or_default(),
                bar_field(bar, LOW_FIELD).unwrap_or_default(),
                bar_field(bar, CLOSE_FIELD).unwrap_or_default(),
                bar_field(bar, VOLUME_FIELD),
            )
        })
        .collect();
    Ok(entries)
}

/// Reads one field of a daily bar as display text. Absent and `null` fields read as `None`.
fn bar_field(bar: &Value, name: &str) -> Option<String> {
    match bar.get(name)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Classifies a body that lacks the expected payload, surfacing throttling notices.
fn unexpected_body(body: &str, fallback: &str) -> SourceError {
    let object = serde_json::from_str::<Map<String, Value>>(body).ok();
    let field = |name: &str| {
        object
            .as_ref()
            .and_then(|object| object.get(name))
            .and_then(Value::as_str)
            .map(str::to_owned)
    };

    if let Some(notice) = field("Note").or_else(|| field("Information")) {
        return SourceError::rate_limited(notice);
    }
    if let Some(message) = field("Error Message") {
        return SourceError::invalid_payload(message);
    }
    SourceError::invalid_payload(fallback)
}

fn log_payload_error(error: &SourceError) {
    match error.kind() {
        crate::SourceErrorKind::RateLimited => {
            tracing::warn!(notice = error.message(), "alphavantage throttled the request");
        }
        _ => tracing::warn!(error = %error, "alphavantage payload rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::SourceErrorKind;
    use crate::http_client::{HttpError, HttpResponse, StaticHttpClient};
    use crate::Symbol;

    const LISTING: &str = "symbol,name,exchange,assetType,ipoDate,delistingDate,status\r\n\
A,Agilent Technologies Inc,NYSE,Stock,1999-11-18,null,Active\r\n\
,Nameless Row,NYSE,Stock,2020-01-01,null,Active\r\n\
AAPL,,NASDAQ,Stock,1980-12-12,null,Active\r\n\
\"BRK.A\",\"Berkshire Hathaway, Inc.\",NYSE,Stock,1980-03-17,null,Active\r\n\
IBM\r\n";

    fn adapter(client: StaticHttpClient) -> (Arc<StaticHttpClient>, AlphaVantageAdapter) {
        let client = Arc::new(client);
        let config = ApiConfig::new("alpha-key", "https://example.test", 1_500)
            .expect("valid config");
        (
            client.clone(),
            AlphaVantageAdapter::with_http_client(client, config),
        )
    }

    fn daily_request(symbol: &str, limit: usize) -> DailySeriesRequest {
        DailySeriesRequest::new(Symbol::parse(symbol).expect("valid symbol"), limit)
            .expect("valid request")
    }

    #[test]
    fn listing_drops_rows_without_symbol_or_name() {
        let listing = parse_listing(LISTING).expect("listing parses");

        let symbols = listing
            .records
            .iter()
            .map(|record| record.symbol.as_str())
            .collect::<Vec<_>>();
        assert_eq!(symbols, vec!["A", "BRK.A"]);
        assert_eq!(listing.records[1].name, "Berkshire Hathaway, Inc.");
        assert_eq!(listing.records[0].exchange.as_deref(), Some("NYSE"));
        assert_eq!(listing.records[0].asset_type.as_deref(), Some("Stock"));
    }

    #[test]
    fn listing_without_header_is_invalid() {
        let error = parse_listing("<html>maintenance</html>").expect_err("no header");
        assert_eq!(error.kind(), SourceErrorKind::InvalidPayload);
    }

    #[test]
    fn listing_information_notice_is_rate_limited() {
        let error = parse_listing(r#"{"Information": "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day."}"#)
            .expect_err("notice is not a listing");
        assert_eq!(error.kind(), SourceErrorKind::RateLimited);
        assert!(error.message().contains("rate limit"));
    }

    #[test]
    fn daily_entries_keep_upstream_order_and_limit() {
        let body = r#"{
            "Meta Data": {"2. Symbol": "IBM"},
            "Time Series (Daily)": {
                "2024-05-03": {"1. open": "166.0", "2. high": "168.0", "3. low": "165.0", "4. close": "167.5", "5. volume": "100"},
                "2024-05-01": {"1. open": "164.0", "2. high": "166.0", "3. low": "163.0", "4. close": "165.5", "5. volume": "110"},
                "2024-05-02": {"1. open": "165.0", "2. high": "167.0", "3. low": "164.0", "4. close": "166.5", "5. volume": "120"}
            }
        }"#;

        let entries = parse_daily_entries(body, 2).expect("series parses");
        let dates = entries.iter().map(|e| e.date.as_str()).collect::<Vec<_>>();
        assert_eq!(dates, vec!["2024-05-03", "2024-05-01"]);
        assert_eq!(entries[0].close, "167.5");
        assert_eq!(entries[0].volume.as_deref(), Some("100"));
    }

    #[test]
    fn daily_entries_render_fields_as_published() {
        let body = r#"{"Time Series (Daily)": {
            "2024-05-10": {"1. open": "167.13", "2. high": "168.07", "4. close": "167.15"},
            "2024-05-09": {"1. open": 167.5, "2. high": 167.8, "3. low": null, "4. close": 166.27, "5. volume": 4266623},
            "last friday": "not a bar"
        }}"#;

        let entries = parse_daily_entries(body, 5).expect("presence of the series is enough");
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].open, "167.13");
        assert_eq!(entries[0].low, "");
        assert_eq!(entries[0].volume, None);

        assert_eq!(entries[1].open, "167.5");
        assert_eq!(entries[1].close, "166.27");
        assert_eq!(entries[1].low, "");
        assert_eq!(entries[1].volume.as_deref(), Some("4266623"));

        assert_eq!(entries[2].date, "last friday");
        assert_eq!(entries[2].open, "");
    }

    #[test]
    fn daily_without_series_key_reports_upstream_message() {
        let error = parse_daily_entries(
            r#"{"Error Message": "Invalid API call. Please retry or visit the documentation."}"#,
            5,
        )
        .expect_err("no series");
        assert_eq!(error.kind(), SourceErrorKind::InvalidPayload);
        assert!(error.message().starts_with("Invalid API call"));

        let error = parse_daily_entries(r#"{"Note": "Thank you for using Alpha Vantage!"}"#, 5)
            .expect_err("throttled");
        assert_eq!(error.kind(), SourceErrorKind::RateLimited);

        let error = parse_daily_entries("not json", 5).expect_err("not json");
        assert_eq!(error.kind(), SourceErrorKind::InvalidPayload);
    }

    #[tokio::test]
    async fn daily_request_carries_function_symbol_and_key() {
        let (client, adapter) = adapter(StaticHttpClient::new().route(
            "function=TIME_SERIES_DAILY",
            Ok(HttpResponse::ok(r#"{"Time Series (Daily)": {}}"#)),
        ));

        let series = adapter
            .daily_series(daily_request("psa^h", 5))
            .await
            .expect("empty series is still a series");
        assert!(series.entries.is_empty());
        assert_eq!(series.symbol.as_str(), "PSA^H");

        let requests = client.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://example.test/query?function=TIME_SERIES_DAILY&symbol=PSA%5EH&apikey=alpha-key"
        );
        assert_eq!(requests[0].timeout_ms, 1_500);
        assert_eq!(
            requests[0].headers.get("accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn transport_and_status_failures_are_fetch_failures() {
        let (_, failing) = adapter(
            StaticHttpClient::new().route("query", Err(HttpError::new("connection refused"))),
        );
        let error = failing.listing().await.expect_err("transport fails");
        assert_eq!(error.kind(), SourceErrorKind::Transport);

        let (_, unavailable) = adapter(
            StaticHttpClient::new().route("query", Ok(HttpResponse::with_status(503, "busy"))),
        );
        let error = unavailable
            .daily_series(daily_request("IBM", 5))
            .await
            .expect_err("status fails");
        assert_eq!(error.kind(), SourceErrorKind::UpstreamStatus);
        assert!(error.is_fetch_failure());
    }
}
