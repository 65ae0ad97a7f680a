pub mod cli;
pub mod model;
pub mod parser;
pub mod scorer;
pub mod writer;

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{error, info};

use crate::model::ScoreCard;

pub use crate::model::{BonusBalls, Frame, Game};
pub use crate::parser::{ParseError, parse_game};
pub use crate::scorer::score;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_logging(args.verbose);

    execute(&args, &mut io::stdout().lock())
}

/// Read, score and write every game selected by `args`.
///
/// Games that parse are written even when others fail; any failure turns
/// into an error after the output so the process exits non-zero.
pub fn execute<W: Write>(args: &cli::Cli, out: &mut W) -> anyhow::Result<()> {
    // 1. ── Read ───────────────────────────────────────────────────────
    let (origin, text) = read_input(args)?;

    // 2. ── Parse + score ──────────────────────────────────────────────
    let scored = score_text(&origin, &text);

    // 3. ── Write outputs ──────────────────────────────────────────────
    writer::emit(&scored.cards, args.format, args.total_only, out)
        .with_context(|| "Writing scores")?;

    for failure in &scored.failures {
        error!("{failure:#}");
    }
    if !scored.failures.is_empty() {
        bail!(
            "{} of {} games could not be parsed",
            scored.failures.len(),
            scored.failures.len() + scored.cards.len()
        );
    }

    Ok(())
}

/// Result of scoring every game in one input.
#[derive(Debug, Default)]
pub struct Scored {
    pub cards: Vec<ScoreCard>,
    /// One entry per game line that did not parse, with its line attached.
    pub failures: Vec<anyhow::Error>,
}

/// Parse and score every game line of `text`; `origin` names the input in
/// error messages.
pub fn score_text(origin: &str, text: &str) -> Scored {
    let mut scored = Scored::default();

    for (line, src) in parser::load_games(text) {
        match parse_game(src) {
            Ok(game) => {
                let card = scorer::score_card(&game);
                info!(line, game = %card.game, total = card.total, "game scored");
                scored.cards.push(card);
            }
            Err(e) => {
                let failure = anyhow::Error::new(e)
                    .context(format!("{origin} line {line}: `{src}`"));
                scored.failures.push(failure);
            }
        }
    }

    scored
}

fn read_input(args: &cli::Cli) -> anyhow::Result<(String, String)> {
    match &args.file {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Reading {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        None if !args.games.is_empty() => Ok(("argument".to_string(), args.games.join("\n"))),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .with_context(|| "Reading stdin")?;
            Ok(("stdin".to_string(), text))
        }
    }
}

/// `warn` by default, `info` with `-v`, `debug` with `-vv`; `RUST_LOG`
/// takes precedence when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
