use std::io::Write;
use std::time::Instant;

use stockview_core::{DataSource, DetailsScreen, Symbol};

use crate::cli::DetailsArgs;
use crate::error::CliError;
use crate::output::Renderer;

use super::CommandOutcome;

pub async fn run<W: Write>(
    args: &DetailsArgs,
    out: &mut W,
    source: &dyn DataSource,
    renderer: &Renderer,
) -> Result<CommandOutcome, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    let started = Instant::now();
    let mut screen = DetailsScreen::new(symbol);
    renderer.loading(out)?;
    screen.load(source).await;
    renderer.details(out, &screen, started.elapsed())?;

    Ok(CommandOutcome::settled(screen.state()))
}
