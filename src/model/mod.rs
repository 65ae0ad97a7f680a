use std::fmt;

use serde::Serialize;

// numeric constants that describe a game of ten-pin bowling
pub const FRAME_COUNT: usize = 10;
pub const PIN_COUNT: u8 = 10;

/// Index of the tenth frame, the only one whose bonus comes from bonus balls.
pub const LAST_FRAME: usize = FRAME_COUNT - 1;

/// One of the ten turns of a game.
///
/// The variant carries exactly the balls that were rolled, so a strike has
/// no second ball and a spare only needs its first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// `X` – all pins on the first ball.
    Strike,
    /// `n/` – all pins using both balls.
    Spare { first: u8 },
    /// Anything else; `first + second < 10`.
    Open { first: u8, second: u8 },
}

impl Frame {
    /// Classify two rolls. Callers guarantee `first + second <= PIN_COUNT`.
    pub fn from_rolls(first: u8, second: u8) -> Self {
        if first == PIN_COUNT {
            Frame::Strike
        } else if first + second == PIN_COUNT {
            Frame::Spare { first }
        } else {
            Frame::Open { first, second }
        }
    }

    pub fn first(&self) -> u16 {
        match *self {
            Frame::Strike => PIN_COUNT as u16,
            Frame::Spare { first } | Frame::Open { first, .. } => first as u16,
        }
    }

    /// Pins on the second ball; zero for a strike.
    pub fn second(&self) -> u16 {
        match *self {
            Frame::Strike => 0,
            Frame::Spare { first } => (PIN_COUNT - first) as u16,
            Frame::Open { second, .. } => second as u16,
        }
    }

    /// Pins knocked down in this frame alone.
    pub fn pins(&self) -> u16 {
        self.first() + self.second()
    }
}

fn ball_mark(pins: u8) -> char {
    match pins {
        0 => '-',
        PIN_COUNT => 'X',
        n => char::from(b'0' + n),
    }
}

/// Renders the frame the way it is written in a game string.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Frame::Strike => write!(f, "X"),
            Frame::Spare { first } => write!(f, "{}/", ball_mark(first)),
            Frame::Open { first, second } => {
                write!(f, "{}{}", ball_mark(first), ball_mark(second))
            }
        }
    }
}

/// The extra balls rolled after a strike or spare in the tenth frame.
///
/// A ball that was not rolled reads as zero; the scorer only looks at
/// these when the tenth frame earned them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BonusBalls {
    pub first: u8,
    pub second: u8,
    /// How many characters the bonus section actually had (0..=2).
    #[serde(skip)]
    pub rolled: u8,
}

impl BonusBalls {
    /// Number of bonus balls a tenth frame of this kind is owed.
    pub fn earned_by(frame: &Frame) -> u8 {
        match frame {
            Frame::Strike => 2,
            Frame::Spare { .. } => 1,
            Frame::Open { .. } => 0,
        }
    }
}

/// A complete game: ten frames plus the bonus balls of frame ten.
///
/// Only the parser builds games, so every frame holds at most ten pins.
///
/// ```compile_fail
/// use tenpin::{BonusBalls, Frame, Game};
///
/// let game = Game::new([Frame::Spare { first: 11 }; 10], BonusBalls::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: [Frame; FRAME_COUNT],
    bonus: BonusBalls,
}

impl Game {
    pub(crate) fn new(frames: [Frame; FRAME_COUNT], bonus: BonusBalls) -> Self {
        Self { frames, bonus }
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    pub fn bonus(&self) -> BonusBalls {
        self.bonus
    }
}

/// Re-encodes the game as `F1|F2|...|F10||B`.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{frame}")?;
        }
        write!(f, "||")?;
        let balls = [self.bonus.first, self.bonus.second];
        for pins in balls.iter().take(self.bonus.rolled as usize) {
            write!(f, "{}", ball_mark(*pins))?;
        }
        Ok(())
    }
}

/// Fully scored game handed to `writer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    /// Canonical encoding of the game.
    pub game: String,
    pub frames: Vec<FrameCard>,
    pub bonus: BonusBalls,
    pub total: u16,
}

/// One box of the score sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameCard {
    /// 1-based.
    pub frame: usize,
    pub marks: String,
    pub score: u16,
    pub running_total: u16,
}
