use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::writer::Format;

#[derive(Parser, Debug)]
#[command(author, version, about = "Score ten-pin bowling games")]
pub struct Cli {
    /// Encoded games, e.g. `X|7/|9-|X|-8|8/|-6|X|X|X||81`.
    /// Put games that start with `-` after `--`.
    pub games: Vec<String>,
    /// File with one game per line (`-` for stdin)
    #[arg(short, long, conflicts_with = "games")]
    pub file: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Print only the final score of each game
    #[arg(long)]
    pub total_only: bool,
    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
