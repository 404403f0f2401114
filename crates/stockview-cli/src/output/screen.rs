//! Text rendering of the two screens.

use std::io::{self, Write};

use stockview_core::{DetailsScreen, ListScreen, LoadState, Locale, Message};

pub fn write_list<W: Write>(out: &mut W, screen: &ListScreen, locale: Locale) -> io::Result<()> {
    match screen.state() {
        LoadState::Loading => writeln!(out, "{}", locale.text(Message::Loading)),
        LoadState::Failed(failure) => writeln!(out, "{}", locale.text(failure.message)),
        LoadState::Loaded(listing) => {
            let width = listing.len().to_string().len();
            for (index, record) in listing.records.iter().enumerate() {
                writeln!(out, "{:>width$}. {}", index + 1, record.name)?;
                match &record.exchange {
                    Some(exchange) => {
                        writeln!(out, "{:width$}  {} · {exchange}", "", record.symbol)?
                    }
                    None => writeln!(out, "{:width$}  {}", "", record.symbol)?,
                }
            }
            Ok(())
        }
    }
}

pub fn write_details<W: Write>(
    out: &mut W,
    screen: &DetailsScreen,
    locale: Locale,
) -> io::Result<()> {
    writeln!(out, "{}", screen.symbol())?;
    match screen.state() {
        LoadState::Loading => writeln!(out, "{}", locale.text(Message::Loading)),
        LoadState::Failed(failure) => writeln!(out, "{}", locale.text(failure.message)),
        LoadState::Loaded(_) => {
            for entry in screen.entries() {
                writeln!(out)?;
                writeln!(out, "{}", entry.date)?;
                writeln!(out, "  {}: {}", locale.text(Message::OpenLabel), entry.open)?;
                writeln!(out, "  {}: {}", locale.text(Message::CloseLabel), entry.close)?;
                writeln!(out, "  {}: {}", locale.text(Message::HighLabel), entry.high)?;
                writeln!(out, "  {}: {}", locale.text(Message::LowLabel), entry.low)?;
            }
            writeln!(out)?;
            writeln!(out, "[ {} ]", locale.text(Message::BackLabel))
        }
    }
}
