use std::fmt;

use thiserror::Error;

use crate::model::{FRAME_COUNT, PIN_COUNT};

/// Where in the game string a problem was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// 1-based frame number.
    Frame(usize),
    Bonus,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Frame(n) => write!(f, "frame {n}"),
            Section::Bonus => write!(f, "bonus balls"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Structure {
    #[error("no `||` separator before the bonus balls")]
    MissingBonusSeparator,
    #[error("more than one `||` separator")]
    ExtraBonusSeparator,
    #[error("expected {expected} frames, found {0}", expected = FRAME_COUNT)]
    FrameCount(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed game: {0}")]
    Structural(Structure),

    #[error("{section}: `{token}` has the wrong number of balls")]
    TokenLength { section: Section, token: String },

    #[error("{section}: invalid character `{ch}` at position {position}")]
    InvalidCharacter {
        section: Section,
        ch: char,
        position: usize,
    },

    #[error("{section}: {pins} pins is more than the {max} on the lane", max = PIN_COUNT)]
    TooManyPins { section: Section, pins: u8 },
}

// manual impl: `#[from]` would also make the structure the error's source
impl From<Structure> for ParseError {
    fn from(structure: Structure) -> Self {
        ParseError::Structural(structure)
    }
}
