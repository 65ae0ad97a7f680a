//! Plain-text score sheet.

use std::io::{self, Write};

use crate::model::ScoreCard;

const BOX_WIDTH: usize = 5;

pub fn emit<W: Write>(cards: &[ScoreCard], out: &mut W) -> io::Result<()> {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        sheet(card, out)?;
    }
    Ok(())
}

/// One total per line, in input order.
pub fn emit_totals<W: Write>(cards: &[ScoreCard], out: &mut W) -> io::Result<()> {
    for card in cards {
        writeln!(out, "{}", card.total)?;
    }
    Ok(())
}

fn sheet<W: Write>(card: &ScoreCard, out: &mut W) -> io::Result<()> {
    writeln!(out, "game:  {}", card.game)?;

    write!(out, "frame:")?;
    for frame in &card.frames {
        write!(out, "{:>BOX_WIDTH$}", frame.frame)?;
    }
    writeln!(out)?;

    write!(out, "marks:")?;
    for frame in &card.frames {
        write!(out, "{:>BOX_WIDTH$}", frame.marks)?;
    }
    writeln!(out)?;

    write!(out, "score:")?;
    for frame in &card.frames {
        write!(out, "{:>BOX_WIDTH$}", frame.running_total)?;
    }
    writeln!(out)?;

    writeln!(out, "total: {}", card.total)
}
