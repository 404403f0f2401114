pub mod screen;

use std::io::Write;
use std::time::Duration;

use serde::Serialize;
use stockview_core::{
    DailyPriceEntry, DetailsScreen, Envelope, EnvelopeError, ListScreen, LoadState, Locale,
    Message, ScreenFailure, SymbolRecord,
};

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;
use crate::metadata::Metadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum ScreenStatus {
    Loading,
    Failed,
    Loaded,
}

impl ScreenStatus {
    fn of<T>(state: &LoadState<T>) -> Self {
        match state {
            LoadState::Loading => Self::Loading,
            LoadState::Failed(_) => Self::Failed,
            LoadState::Loaded(_) => Self::Loaded,
        }
    }
}

#[derive(Debug, Serialize)]
struct ListResponseData<'a> {
    screen: &'static str,
    status: ScreenStatus,
    records: &'a [SymbolRecord],
}

#[derive(Debug, Serialize)]
struct DetailsResponseData<'a> {
    screen: &'static str,
    symbol: &'a str,
    status: ScreenStatus,
    entries: &'a [DailyPriceEntry],
}

/// Writes screens in the selected output format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    pretty: bool,
    locale: Locale,
    source: &'static str,
}

impl Renderer {
    pub fn new(format: OutputFormat, pretty: bool, locale: Locale, source: &'static str) -> Self {
        Self {
            format,
            pretty,
            locale,
            source,
        }
    }

    pub fn from_cli(cli: &Cli, source: &'static str) -> Self {
        Self::new(cli.format, cli.pretty, cli.locale, source)
    }

    pub fn list<W: Write>(
        &self,
        out: &mut W,
        list: &ListScreen,
        latency: Duration,
    ) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Table => screen::write_list(out, list, self.locale)?,
            OutputFormat::Json => {
                let data = ListResponseData {
                    screen: "list",
                    status: ScreenStatus::of(list.state()),
                    records: list.records(),
                };
                self.write_envelope(out, data, list.state().failure(), latency)?;
            }
        }
        Ok(())
    }

    pub fn details<W: Write>(
        &self,
        out: &mut W,
        details: &DetailsScreen,
        latency: Duration,
    ) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Table => screen::write_details(out, details, self.locale)?,
            OutputFormat::Json => {
                let data = DetailsResponseData {
                    screen: "details",
                    symbol: details.symbol().as_str(),
                    status: ScreenStatus::of(details.state()),
                    entries: details.entries(),
                };
                self.write_envelope(out, data, details.state().failure(), latency)?;
            }
        }
        Ok(())
    }

    /// Shows the loading indicator while a screen's request is in flight.
    pub fn loading<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        self.hint(out, Message::Loading)
    }

    /// Writes an interactive hint. JSON output stays one envelope per line, so hints are skipped.
    pub fn hint<W: Write>(&self, out: &mut W, message: Message) -> Result<(), CliError> {
        if self.format == OutputFormat::Table {
            writeln!(out, "{}", self.locale.text(message))?;
            out.flush()?;
        }
        Ok(())
    }

    fn write_envelope<W: Write, T: Serialize>(
        &self,
        out: &mut W,
        data: T,
        failure: Option<&ScreenFailure>,
        latency: Duration,
    ) -> Result<(), CliError> {
        let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        let meta = Metadata::new(self.source, self.locale, latency_ms).into_envelope_meta()?;
        let errors = failure
            .map(|failure| self.envelope_error(failure))
            .transpose()?
            .into_iter()
            .collect();

        let envelope = Envelope::with_errors(meta, data, errors)?;
        writeln!(out, "{}", envelope.to_json(self.pretty)?)?;
        Ok(())
    }

    fn envelope_error(&self, failure: &ScreenFailure) -> Result<EnvelopeError, CliError> {
        let error = EnvelopeError::new(failure.message.code(), self.locale.text(failure.message))?;
        Ok(match &failure.cause {
            Some(cause) => error.with_detail(cause.to_string()),
            None => error,
        })
    }
}
