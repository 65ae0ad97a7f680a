//! Output stage: renders score cards for the terminal or for other tools.
pub mod json;
pub mod text;

use std::io::{self, Write};

use clap::ValueEnum;

use crate::model::ScoreCard;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Score sheet per game
    #[default]
    Text,
    /// Array of score cards
    Json,
}

pub fn emit<W: Write>(
    cards: &[ScoreCard],
    format: Format,
    total_only: bool,
    out: &mut W,
) -> io::Result<()> {
    match format {
        Format::Text if total_only => text::emit_totals(cards, out),
        Format::Text => text::emit(cards, out),
        Format::Json => json::emit(cards, total_only, out),
    }
}
