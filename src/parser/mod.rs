//! Turns the textual game encoding into a `Game`.
//!
//! The accepted form is `F1|F2|...|F10||B`:
//!   • ten `|`-separated frame tokens, each `X` or two ball marks
//!   • a single `||` separator
//!   • zero to two bonus-ball marks
//!
//! Anything else is rejected with a `ParseError` naming the frame or
//! section at fault.
pub mod error;
pub mod lexer;

use std::str::FromStr;

use tracing::{debug, warn};

use crate::model::{BonusBalls, FRAME_COUNT, Frame, Game, LAST_FRAME, PIN_COUNT};

pub use error::{ParseError, Section, Structure};
use lexer::{Lexer, Mark};

const BONUS_SEPARATOR: &str = "||";
const FRAME_SEPARATOR: char = '|';

/// Parse a whole game string.
pub fn parse_game(input: &str) -> Result<Game, ParseError> {
    let (frames_src, bonus_src) = split_bonus(input)?;

    let tokens: Vec<&str> = frames_src.split(FRAME_SEPARATOR).collect();
    if tokens.len() != FRAME_COUNT {
        return Err(Structure::FrameCount(tokens.len()).into());
    }

    let mut frames = [Frame::Strike; FRAME_COUNT];
    for (i, token) in tokens.iter().enumerate() {
        frames[i] = parse_frame(i + 1, token)?;
        debug!(frame = i + 1, token = *token, parsed = ?frames[i], "frame parsed");
    }

    let bonus = parse_bonus(bonus_src)?;
    let earned = BonusBalls::earned_by(&frames[LAST_FRAME]);
    if bonus.rolled > earned {
        warn!(
            rolled = bonus.rolled,
            earned, "bonus balls present that frame ten did not earn, ignoring them"
        );
    } else if bonus.rolled < earned {
        debug!(rolled = bonus.rolled, earned, "missing bonus balls count as zero");
    }

    Ok(Game::new(frames, bonus))
}

impl FromStr for Game {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_game(s)
    }
}

/// Every game line of a multi-game text, numbered from 1.
///
/// Blank lines and `#` comments are skipped; surrounding whitespace is
/// trimmed so the line can go straight into `parse_game`.
pub fn load_games(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn split_bonus(input: &str) -> Result<(&str, &str), ParseError> {
    let mut parts = input.split(BONUS_SEPARATOR);
    // `split` always yields at least one piece
    let frames = parts.next().unwrap_or_default();
    let bonus = parts.next().ok_or(Structure::MissingBonusSeparator)?;
    // `|||` leaves a stray pipe at the front of the bonus section
    if parts.next().is_some() || bonus.starts_with(FRAME_SEPARATOR) {
        return Err(Structure::ExtraBonusSeparator.into());
    }
    Ok((frames, bonus))
}

fn lex(section: Section, token: &str) -> Result<Vec<Mark>, ParseError> {
    Lexer::new(token)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ParseError::InvalidCharacter {
            section,
            ch: e.ch,
            position: e.position,
        })
}

fn invalid_at(section: Section, token: &str, position: usize) -> ParseError {
    ParseError::InvalidCharacter {
        section,
        ch: token.chars().nth(position).unwrap_or_default(),
        position,
    }
}

fn parse_frame(number: usize, token: &str) -> Result<Frame, ParseError> {
    let section = Section::Frame(number);
    let marks = lex(section, token)?;

    let (first, second) = match marks.as_slice() {
        [Mark::Strike] => return Ok(Frame::Strike),
        [first, second] => (*first, *second),
        _ => {
            return Err(ParseError::TokenLength {
                section,
                token: token.to_string(),
            });
        }
    };

    // `X` only ever stands alone, `/` never comes first
    let first = match first {
        Mark::Strike | Mark::Spare => return Err(invalid_at(section, token, 0)),
        mark => mark.pins().unwrap_or_default(),
    };

    let second = match second {
        Mark::Strike => return Err(invalid_at(section, token, 1)),
        Mark::Spare => PIN_COUNT - first,
        mark => mark.pins().unwrap_or_default(),
    };

    let pins = first + second;
    if pins > PIN_COUNT {
        return Err(ParseError::TooManyPins { section, pins });
    }

    Ok(Frame::from_rolls(first, second))
}

fn parse_bonus(token: &str) -> Result<BonusBalls, ParseError> {
    let section = Section::Bonus;
    let marks = lex(section, token)?;
    if marks.len() > 2 {
        return Err(ParseError::TokenLength {
            section,
            token: token.to_string(),
        });
    }

    let mut balls = [0u8; 2];
    for (position, mark) in marks.iter().enumerate() {
        // each bonus ball stands alone, so a spare marker means nothing here
        balls[position] = mark
            .pins()
            .ok_or_else(|| invalid_at(section, token, position))?;
    }

    Ok(BonusBalls {
        first: balls[0],
        second: balls[1],
        rolled: marks.len() as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame() {
        let test_cases = vec![
            ("X", Ok(Frame::Strike)),
            ("7/", Ok(Frame::Spare { first: 7 })),
            ("-/", Ok(Frame::Spare { first: 0 })),
            ("55", Ok(Frame::Spare { first: 5 })),
            ("9-", Ok(Frame::Open { first: 9, second: 0 })),
            ("-8", Ok(Frame::Open { first: 0, second: 8 })),
            ("--", Ok(Frame::Open { first: 0, second: 0 })),
            ("11", Ok(Frame::Open { first: 1, second: 1 })),
            (
                "",
                Err(ParseError::TokenLength {
                    section: Section::Frame(1),
                    token: "".into(),
                }),
            ),
            (
                "---",
                Err(ParseError::TokenLength {
                    section: Section::Frame(1),
                    token: "---".into(),
                }),
            ),
            (
                "5",
                Err(ParseError::TokenLength {
                    section: Section::Frame(1),
                    token: "5".into(),
                }),
            ),
            (
                "X5",
                Err(ParseError::InvalidCharacter {
                    section: Section::Frame(1),
                    ch: 'X',
                    position: 0,
                }),
            ),
            (
                "5X",
                Err(ParseError::InvalidCharacter {
                    section: Section::Frame(1),
                    ch: 'X',
                    position: 1,
                }),
            ),
            (
                "/5",
                Err(ParseError::InvalidCharacter {
                    section: Section::Frame(1),
                    ch: '/',
                    position: 0,
                }),
            ),
            (
                "1.",
                Err(ParseError::InvalidCharacter {
                    section: Section::Frame(1),
                    ch: '.',
                    position: 1,
                }),
            ),
            (
                "87",
                Err(ParseError::TooManyPins {
                    section: Section::Frame(1),
                    pins: 15,
                }),
            ),
        ];

        for (input, expected) in test_cases {
            assert_eq!(parse_frame(1, input), expected, "frame {input:?}");
        }
    }

    #[test]
    fn test_parse_bonus() {
        let test_cases = vec![
            (
                "",
                Ok(BonusBalls {
                    first: 0,
                    second: 0,
                    rolled: 0,
                }),
            ),
            (
                "5",
                Ok(BonusBalls {
                    first: 5,
                    second: 0,
                    rolled: 1,
                }),
            ),
            (
                "XX",
                Ok(BonusBalls {
                    first: 10,
                    second: 10,
                    rolled: 2,
                }),
            ),
            (
                "81",
                Ok(BonusBalls {
                    first: 8,
                    second: 1,
                    rolled: 2,
                }),
            ),
            // bonus balls never need to add up
            (
                "99",
                Ok(BonusBalls {
                    first: 9,
                    second: 9,
                    rolled: 2,
                }),
            ),
            (
                "-X",
                Ok(BonusBalls {
                    first: 0,
                    second: 10,
                    rolled: 2,
                }),
            ),
            (
                "5/",
                Err(ParseError::InvalidCharacter {
                    section: Section::Bonus,
                    ch: '/',
                    position: 1,
                }),
            ),
            (
                "XXX",
                Err(ParseError::TokenLength {
                    section: Section::Bonus,
                    token: "XXX".into(),
                }),
            ),
            (
                "?",
                Err(ParseError::InvalidCharacter {
                    section: Section::Bonus,
                    ch: '?',
                    position: 0,
                }),
            ),
        ];

        for (input, expected) in test_cases {
            assert_eq!(parse_bonus(input), expected, "bonus {input:?}");
        }
    }

    #[test]
    fn test_structural_errors() {
        let test_cases = vec![
            ("", Structure::MissingBonusSeparator),
            ("|", Structure::MissingBonusSeparator),
            ("--|--|--|--|--|--|--|--|--|--|", Structure::MissingBonusSeparator),
            ("--|--|--|--|--|--|--|--|--||", Structure::FrameCount(9)),
            ("--|--|--|--|--|--|--|--|--|--|--||", Structure::FrameCount(11)),
            ("X|X|X|X||X|X|X|X|X||XX", Structure::ExtraBonusSeparator),
            ("X|X|X|X|X|X|X|X|X|X|||X", Structure::ExtraBonusSeparator),
            ("X|X|X|X|X|X|X|X|X|X|||", Structure::ExtraBonusSeparator),
        ];

        for (input, expected) in test_cases {
            assert_eq!(
                parse_game(input),
                Err(ParseError::Structural(expected)),
                "game {input:?}"
            );
        }
    }

    #[test]
    fn test_frame_errors_name_the_frame() {
        let err = parse_game("X|X|X|X|?|X|X|X|X|X||XX").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidCharacter {
                section: Section::Frame(5),
                ch: '?',
                position: 0,
            }
        );
        assert_eq!(err.to_string(), "frame 5: invalid character `?` at position 0");

        let err = parse_game("X|X|X|X|X|X|X|X|X|X||X+").unwrap_err();
        assert_eq!(
            err.to_string(),
            "bonus balls: invalid character `+` at position 1"
        );
    }

    #[test]
    fn test_parse_game() {
        let game = parse_game("X|7/|9-|X|-8|8/|-6|X|X|X||81").unwrap();
        assert_eq!(game.frames()[0], Frame::Strike);
        assert_eq!(game.frames()[1], Frame::Spare { first: 7 });
        assert_eq!(game.frames()[4], Frame::Open { first: 0, second: 8 });
        assert_eq!(game.bonus().first, 8);
        assert_eq!(game.bonus().second, 1);

        // deterministic
        assert_eq!(game, parse_game("X|7/|9-|X|-8|8/|-6|X|X|X||81").unwrap());
    }

    #[test]
    fn test_from_str_and_display() {
        let test_cases = vec![
            ("X|7/|9-|X|-8|8/|-6|X|X|X||81", "X|7/|9-|X|-8|8/|-6|X|X|X||81"),
            ("--|--|--|--|--|--|--|--|--|--||", "--|--|--|--|--|--|--|--|--|--||"),
            // literal spares come back out with the spare marker
            ("55|5/|-/|00|--|--|--|--|--|--||", "5/|5/|-/|--|--|--|--|--|--|--||"),
        ];

        for (input, expected) in test_cases {
            let game: Game = input.parse().unwrap();
            assert_eq!(game.to_string(), expected);
        }
    }

    #[test]
    fn test_load_games() {
        let text = "# league night\nX|X|X|X|X|X|X|X|X|X||XX\n\n  9-|9-|9-|9-|9-|9-|9-|9-|9-|9-||  \n";
        let games: Vec<_> = load_games(text).collect();
        assert_eq!(
            games,
            vec![
                (2, "X|X|X|X|X|X|X|X|X|X||XX"),
                (4, "9-|9-|9-|9-|9-|9-|9-|9-|9-|9-||"),
            ]
        );
    }
}
