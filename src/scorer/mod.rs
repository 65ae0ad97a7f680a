//! The scoring pass.
//!
//! A single forward walk over the ten frames. Each frame scores its own
//! pins plus a lookahead bonus: the next two balls after a strike, the next
//! ball after a spare. Frame ten takes its lookahead from the bonus balls,
//! and a strike in frame nine followed by a strike in frame ten reaches
//! into the first bonus ball.

use tracing::debug;

use crate::model::{BonusBalls, FRAME_COUNT, Frame, FrameCard, Game, LAST_FRAME, ScoreCard};

/// Total score of a complete game, 0..=300.
pub fn score(game: &Game) -> u16 {
    frame_scores(game).iter().sum()
}

/// What each frame contributes to the total.
pub fn frame_scores(game: &Game) -> [u16; FRAME_COUNT] {
    let frames = game.frames();
    let bonus = game.bonus();

    std::array::from_fn(|i| {
        let frame = frames[i];
        let lookahead = match frame {
            Frame::Strike => strike_bonus(frames, bonus, i),
            Frame::Spare { .. } => spare_bonus(frames, bonus, i),
            Frame::Open { .. } => 0,
        };
        let total = frame.pins() + lookahead;
        debug!(frame = i + 1, pins = frame.pins(), lookahead, total, "frame scored");
        total
    })
}

/// The score sheet row: cumulative total after each frame.
pub fn running_totals(game: &Game) -> [u16; FRAME_COUNT] {
    let mut acc = 0;
    frame_scores(game).map(|s| {
        acc += s;
        acc
    })
}

/// Score a game and lay it out as a score sheet.
pub fn score_card(game: &Game) -> ScoreCard {
    let scores = frame_scores(game);
    let totals = running_totals(game);

    let frames = game
        .frames()
        .iter()
        .enumerate()
        .map(|(i, frame)| FrameCard {
            frame: i + 1,
            marks: frame.to_string(),
            score: scores[i],
            running_total: totals[i],
        })
        .collect();

    ScoreCard {
        game: game.to_string(),
        frames,
        bonus: game.bonus(),
        total: totals[LAST_FRAME],
    }
}

fn strike_bonus(frames: &[Frame; FRAME_COUNT], bonus: BonusBalls, i: usize) -> u16 {
    if i == LAST_FRAME {
        return bonus.first as u16 + bonus.second as u16;
    }

    let next = frames[i + 1];
    match next {
        // double strike: the second ball is the first ball of the frame after
        Frame::Strike if i + 1 < LAST_FRAME => next.first() + frames[i + 2].first(),
        // strike in nine then ten: the second ball is the first bonus ball
        Frame::Strike => next.first() + bonus.first as u16,
        Frame::Spare { .. } | Frame::Open { .. } => next.first() + next.second(),
    }
}

fn spare_bonus(frames: &[Frame; FRAME_COUNT], bonus: BonusBalls, i: usize) -> u16 {
    if i == LAST_FRAME {
        bonus.first as u16
    } else {
        frames[i + 1].first()
    }
}
