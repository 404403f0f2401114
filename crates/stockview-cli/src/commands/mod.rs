mod browse;
mod details;
mod list;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use stockview_core::adapters::fixtures::sample_http_client;
use stockview_core::config::API_KEY_ENV;
use stockview_core::{AlphaVantageAdapter, ApiConfig, DataSource, LoadState};
use tokio::io::BufReader;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::Renderer;

/// Exit status for a screen that settled on an error message.
const SCREEN_FAILED_EXIT: u8 = 3;

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Loaded,
    Failed,
    SessionEnded { screens_rendered: usize },
}

impl CommandOutcome {
    pub fn settled<T>(state: &LoadState<T>) -> Self {
        match state {
            LoadState::Failed(_) => Self::Failed,
            LoadState::Loading | LoadState::Loaded(_) => Self::Loaded,
        }
    }

    pub const fn exit_status(self) -> u8 {
        match self {
            Self::Failed => SCREEN_FAILED_EXIT,
            Self::Loaded | Self::SessionEnded { .. } => 0,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

pub async fn run(cli: &Cli) -> Result<CommandOutcome, CliError> {
    let source = build_source(cli)?;
    let renderer = Renderer::from_cli(cli, source.name());
    let mut out = io::stdout();

    match &cli.command {
        Command::List => list::run(&mut out, &source, &renderer).await,
        Command::Details(args) => details::run(args, &mut out, &source, &renderer).await,
        Command::Browse => {
            let input = BufReader::new(tokio::io::stdin());
            browse::run(input, &mut out, &source, &renderer).await
        }
    }
}

fn build_source(cli: &Cli) -> Result<AlphaVantageAdapter, CliError> {
    let mut config = ApiConfig::from_env()?.with_timeout_ms(cli.timeout_ms)?;
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key.as_str())?;
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str())?;
    }

    if config.uses_demo_key() && !cli.mock {
        tracing::warn!(
            "no api key configured; the public demo key only serves daily prices for IBM. \
             Set --api-key or {API_KEY_ENV}"
        );
    }

    if cli.mock {
        tracing::info!("serving bundled sample payloads");
        Ok(AlphaVantageAdapter::with_http_client(
            Arc::new(sample_http_client()),
            config,
        ))
    } else {
        Ok(AlphaVantageAdapter::new(config))
    }
}
