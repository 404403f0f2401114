use std::io::Write;
use std::time::Instant;

use stockview_core::{DataSource, ListScreen};

use crate::error::CliError;
use crate::output::Renderer;

use super::CommandOutcome;

pub async fn run<W: Write>(
    out: &mut W,
    source: &dyn DataSource,
    renderer: &Renderer,
) -> Result<CommandOutcome, CliError> {
    let started = Instant::now();
    let mut screen = ListScreen::new();
    renderer.loading(out)?;
    screen.load(source).await;
    renderer.list(out, &screen, started.elapsed())?;

    Ok(CommandOutcome::settled(screen.state()))
}
