//! JSON output via serde.

use std::io::{self, Write};

use crate::model::ScoreCard;

pub fn emit<W: Write>(cards: &[ScoreCard], total_only: bool, out: &mut W) -> io::Result<()> {
    if total_only {
        let totals: Vec<u16> = cards.iter().map(|c| c.total).collect();
        serde_json::to_writer_pretty(&mut *out, &totals)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, cards)?;
    }
    writeln!(out)
}
