//! Interactive session: list → details → back, driven line by line.

use std::io::Write;
use std::time::{Duration, Instant};

use stockview_core::{Action, App, DataSource, Message, Route};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::CliError;
use crate::output::Renderer;

use super::CommandOutcome;

const QUIT_WORDS: [&str; 3] = ["q", "quit", "sair"];
const BACK_WORDS: [&str; 4] = ["v", "voltar", "b", "back"];

/// What one line of input asks for on the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Quit,
    Navigate(Action),
    Stay(Message),
}

fn interpret(app: &App, line: &str) -> Step {
    let input = line.trim();
    if QUIT_WORDS.iter().any(|word| input.eq_ignore_ascii_case(word)) {
        return Step::Quit;
    }

    match app.route() {
        Route::List(list) => match list.resolve(input) {
            Ok(symbol) => Step::Navigate(Action::Select(symbol)),
            Err(message) => Step::Stay(message),
        },
        Route::Details(_) => {
            if input.is_empty() || BACK_WORDS.iter().any(|word| input.eq_ignore_ascii_case(word)) {
                Step::Navigate(Action::GoBack)
            } else {
                Step::Stay(Message::DetailsPrompt)
            }
        }
    }
}

const fn prompt(app: &App) -> Message {
    match app.route() {
        Route::List(_) => Message::ListPrompt,
        Route::Details(_) => Message::DetailsPrompt,
    }
}

fn render<W: Write>(
    app: &App,
    out: &mut W,
    renderer: &Renderer,
    latency: Duration,
) -> Result<(), CliError> {
    match app.route() {
        Route::List(list) => renderer.list(out, list, latency),
        Route::Details(details) => renderer.details(out, details, latency),
    }
}

/// Runs until `q` or end of input. Every navigation renders the newly active screen once it settles.
pub async fn run<R, W>(
    input: R,
    out: &mut W,
    source: &dyn DataSource,
    renderer: &Renderer,
) -> Result<CommandOutcome, CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut app = App::new();
    let mut lines = input.lines();
    let mut screens_rendered = 0;

    loop {
        let started = Instant::now();
        renderer.loading(out)?;
        app.load(source).await;
        render(&app, out, renderer, started.elapsed())?;
        screens_rendered += 1;
        renderer.hint(out, prompt(&app))?;

        let action = loop {
            let Some(line) = lines.next_line().await? else {
                return Ok(CommandOutcome::SessionEnded { screens_rendered });
            };
            match interpret(&app, &line) {
                Step::Quit => return Ok(CommandOutcome::SessionEnded { screens_rendered }),
                Step::Navigate(action) => break action,
                Step::Stay(message) => renderer.hint(out, message)?,
            }
        };
        tracing::debug!(?action, "navigating");
        app.handle(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use stockview_core::adapters::fixtures::sample_http_client;
    use stockview_core::{AlphaVantageAdapter, ApiConfig, Locale, StaticHttpClient, Symbol};

    use crate::cli::OutputFormat;

    fn symbol(raw: &str) -> Symbol {
        Symbol::parse(raw).expect("valid symbol")
    }

    async fn session(
        script: &str,
        format: OutputFormat,
    ) -> (CommandOutcome, String, Arc<StaticHttpClient>) {
        let client = Arc::new(sample_http_client());
        let source = AlphaVantageAdapter::with_http_client(client.clone(), ApiConfig::default());
        let renderer = Renderer::new(format, false, Locale::PtBr, "alphavantage");
        let mut out = Vec::new();

        let outcome = run(script.as_bytes(), &mut out, &source, &renderer)
            .await
            .expect("session runs");
        (outcome, String::from_utf8(out).expect("utf-8"), client)
    }

    fn requested_functions(client: &StaticHttpClient) -> Vec<&'static str> {
        client
            .recorded_requests()
            .iter()
            .map(|request| {
                if request.url.contains("LISTING_STATUS") {
                    "LISTING_STATUS"
                } else {
                    "TIME_SERIES_DAILY"
                }
            })
            .collect()
    }

    // ============================================================================
    // Input interpretation
    // ============================================================================

    #[test]
    fn quit_is_recognised_on_every_screen() {
        assert_eq!(interpret(&App::new(), " Q "), Step::Quit);
        assert_eq!(interpret(&App::with_selection(symbol("IBM")), "sair"), Step::Quit);
    }

    #[test]
    fn details_go_back_on_enter_or_back_words() {
        let app = App::with_selection(symbol("IBM"));

        assert_eq!(interpret(&app, ""), Step::Navigate(Action::GoBack));
        assert_eq!(interpret(&app, "Voltar"), Step::Navigate(Action::GoBack));
        assert_eq!(interpret(&app, "b"), Step::Navigate(Action::GoBack));
        assert_eq!(interpret(&app, "IBM"), Step::Stay(Message::DetailsPrompt));
    }

    #[test]
    fn unresolved_list_input_stays_on_the_list() {
        // Given: a listing that has not loaded yet
        let app = App::new();

        // Then: nothing can be selected from it
        assert_eq!(interpret(&app, "1"), Step::Stay(Message::UnknownSelection));
    }

    // ============================================================================
    // Sessions
    // ============================================================================

    #[tokio::test]
    async fn select_by_row_then_back_refetches_the_listing() {
        // Given: the bundled listing, where row 4 is IBM
        // When: the user opens row 4, presses Enter, then quits
        let (outcome, text, client) = session("4\n\nq\n", OutputFormat::Table).await;

        // Then: list, details and a fresh list were rendered
        assert_eq!(outcome, CommandOutcome::SessionEnded { screens_rendered: 3 });
        assert!(text.contains("IBM\n\n2024-05-10\n  Abertura: 167.1300\n"));
        assert!(text.contains("[ Voltar ]"));
        assert_eq!(text.matches("1. Agilent Technologies Inc").count(), 2);
        assert_eq!(text.matches("Carregando...\n").count(), 3);
        assert!(text.starts_with("Carregando...\n1. Agilent Technologies Inc\n"));
        assert!(text.contains("\nCarregando...\nIBM\n"));
        assert_eq!(
            requested_functions(&client),
            ["LISTING_STATUS", "TIME_SERIES_DAILY", "LISTING_STATUS"]
        );
    }

    #[tokio::test]
    async fn unknown_input_keeps_the_list_without_refetching() {
        let (outcome, text, client) = session("NOPE\nq\n", OutputFormat::Table).await;

        assert_eq!(outcome, CommandOutcome::SessionEnded { screens_rendered: 1 });
        assert!(text.contains("Ativo não encontrado na lista.\n"));
        assert_eq!(requested_functions(&client), ["LISTING_STATUS"]);
    }

    #[tokio::test]
    async fn end_of_input_ends_the_session() {
        let (outcome, _, _) = session("aapl\n", OutputFormat::Table).await;

        assert_eq!(outcome, CommandOutcome::SessionEnded { screens_rendered: 2 });
    }

    #[tokio::test]
    async fn json_sessions_emit_one_envelope_per_screen() {
        let (_, text, _) = session("msft\nv\nq\n", OutputFormat::Json).await;

        let screens: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("each line is an envelope"))
            .collect();
        assert_eq!(screens.len(), 3);
        assert_eq!(screens[0]["data"]["screen"], "list");
        assert_eq!(screens[1]["data"]["symbol"], "MSFT");
        assert_eq!(screens[1]["errors"][0]["code"], "details.unavailable");
        assert_eq!(screens[2]["data"]["status"], "loaded");
    }
}
