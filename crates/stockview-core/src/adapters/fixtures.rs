//! Bundled sample payloads served by `--mock` mode.
//!
//! The listing includes two incomplete rows that the listing screen must drop.
//! Only `IBM` and `AAPL` have a daily series; other symbols get the upstream's
//! "Invalid API call" answer.

use crate::http_client::{HttpResponse, StaticHttpClient};

pub const SAMPLE_LISTING_CSV: &str = "\
symbol,name,exchange,assetType,ipoDate,delistingDate,status
A,Agilent Technologies Inc,NYSE,Stock,1999-11-18,null,Active
AAPL,Apple Inc,NASDAQ,Stock,1980-12-12,null,Active
,Orphaned Listing Row,NYSE,Stock,2021-06-01,null,Active
BRK.A,Berkshire Hathaway Inc,NYSE,Stock,1980-03-17,null,Active
IBM,International Business Machines Corp,NYSE,Stock,1962-01-02,null,Active
MSFT,Microsoft Corporation,NASDAQ,Stock,1986-03-13,null,Active
ZVZZT,,NASDAQ,Stock,2007-01-01,null,Active
";

pub const SAMPLE_IBM_DAILY_JSON: &str = r#"{
    "Meta Data": {
        "1. Information": "Daily Prices (open, high, low, close) and Volumes",
        "2. Symbol": "IBM",
        "3. Last Refreshed": "2024-05-10",
        "4. Output Size": "Compact",
        "5. Time Zone": "US/Eastern"
    },
    "Time Series (Daily)": {
        "2024-05-10": {"1. open": "167.1300", "2. high": "168.0700", "3. low": "166.3200", "4. close": "167.1500", "5. volume": "2255373"},
        "2024-05-09": {"1. open": "167.5000", "2. high": "167.8000", "3. low": "165.8000", "4. close": "166.2700", "5. volume": "4266623"},
        "2024-05-08": {"1. open": "168.0000", "2. high": "170.2600", "3. low": "167.9100", "4. close": "169.9000", "5. volume": "3524349"},
        "2024-05-07": {"1. open": "169.0000", "2. high": "169.2900", "3. low": "167.9400", "4. close": "168.3800", "5. volume": "3155256"},
        "2024-05-06": {"1. open": "166.5000", "2. high": "169.0700", "3. low": "166.5000", "4. close": "168.6100", "5. volume": "4221069"},
        "2024-05-03": {"1. open": "166.6300", "2. high": "167.2000", "3. low": "164.9300", "4. close": "165.7100", "5. volume": "3933282"}
    }
}"#;

pub const SAMPLE_AAPL_DAILY_JSON: &str = r#"{
    "Meta Data": {
        "1. Information": "Daily Prices (open, high, low, close) and Volumes",
        "2. Symbol": "AAPL",
        "3. Last Refreshed": "2024-05-10",
        "4. Output Size": "Compact",
        "5. Time Zone": "US/Eastern"
    },
    "Time Series (Daily)": {
        "2024-05-10": {"1. open": "184.9000", "2. high": "185.0900", "3. low": "182.1300", "4. close": "183.0500", "5. volume": "50759496"},
        "2024-05-09": {"1. open": "182.5600", "2. high": "184.6600", "3. low": "182.1100", "4. close": "184.5700", "5. volume": "48982972"},
        "2024-05-08": {"1. open": "182.8500", "2. high": "183.0700", "3. low": "181.4500", "4. close": "182.7400", "5. volume": "45057087"}
    }
}"#;

pub const SAMPLE_INVALID_CALL_JSON: &str = r#"{
    "Error Message": "Invalid API call. Please retry or visit the documentation (https://www.alphavantage.co/documentation/) for TIME_SERIES_DAILY."
}"#;

/// Transport answering listing and daily requests with the bundled samples.
pub fn sample_http_client() -> StaticHttpClient {
    StaticHttpClient::new()
        .route(
            "function=LISTING_STATUS",
            Ok(HttpResponse::ok(SAMPLE_LISTING_CSV)),
        )
        .route(
            "function=TIME_SERIES_DAILY&symbol=IBM&",
            Ok(HttpResponse::ok(SAMPLE_IBM_DAILY_JSON)),
        )
        .route(
            "function=TIME_SERIES_DAILY&symbol=AAPL&",
            Ok(HttpResponse::ok(SAMPLE_AAPL_DAILY_JSON)),
        )
        .route(
            "function=TIME_SERIES_DAILY",
            Ok(HttpResponse::ok(SAMPLE_INVALID_CALL_JSON)),
        )
}
