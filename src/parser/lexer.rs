//! Very small hand-written lexer for the ball marks of a game string.
//!
//! It only turns a frame or bonus token into `Mark`s. Whether a mark is
//! allowed where it appears (a `/` as first ball, an `X` inside a two-ball
//! frame) is decided by the parser.
//
//  Lexical items:
//
//      Strike   ::= 'X'
//      Spare    ::= '/'
//      Miss     ::= '-'
//      Pins     ::= [0-9]

use std::iter::Enumerate;
use std::str::Chars;

use crate::model::PIN_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Strike,
    Spare,
    Miss,
    Pins(u8),
}

impl Mark {
    /// Pins knocked down by a mark that stands on its own.
    /// `None` for `/`, whose value depends on the ball before it.
    pub fn pins(self) -> Option<u8> {
        match self {
            Mark::Strike => Some(PIN_COUNT),
            Mark::Miss => Some(0),
            Mark::Pins(n) => Some(n),
            Mark::Spare => None,
        }
    }
}

/// A character outside the mark vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownMark {
    /// Zero-based char offset inside the token.
    pub position: usize,
    pub ch: char,
}

#[derive(Clone)]
pub struct Lexer<'a> {
    chars: Enumerate<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().enumerate(),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Mark, UnknownMark>;

    fn next(&mut self) -> Option<Self::Item> {
        let (position, ch) = self.chars.next()?;

        let mark = match ch {
            'X' => Ok(Mark::Strike),
            '/' => Ok(Mark::Spare),
            '-' => Ok(Mark::Miss),
            c if c.is_ascii_digit() => Ok(Mark::Pins(c as u8 - b'0')),
            ch => Err(UnknownMark { position, ch }),
        };

        Some(mark)
    }
}
