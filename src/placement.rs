use rand::{seq::SliceRandom, Rng};
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    board::Board,
    letters::{self, DirectionMode},
    shape::{self, Placement, ShapeFlags},
};

/// How many random candidates are tried for a word before giving up on it.
pub const MAX_ATTEMPTS: usize = 100;

/// Why a single word could not be placed. Generation carries on with the next word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The enabled shapes have no room for a word of this length on this board.
    #[error("no valid placements found")]
    NoValidPlacements,

    /// Every sampled candidate collided with letters already on the board.
    #[error("max attempts exceeded")]
    MaxAttemptsExceeded,
}

/// Places `word` on `board` using the enabled `shapes` and direction `mode`.
///
/// Candidates are enumerated once and sampled uniformly, up to [MAX_ATTEMPTS] times. Each attempt
/// fixes the letter arrangement before checking any cell, and the board is only written once every
/// position accepts its letter. Returns the committed placement.
pub fn place<R: Rng + ?Sized>(
    board: &mut Board,
    word: &str,
    shapes: &ShapeFlags,
    mode: DirectionMode,
    rng: &mut R,
) -> Result<Placement, PlacementError> {
    let word: Vec<char> = word.chars().collect();
    let candidates = shape::enumerate(word.len(), board.size(), shapes);

    debug!(
        len = word.len(),
        candidates = candidates.len(),
        "enumerated candidate placements"
    );

    if candidates.is_empty() {
        return Err(PlacementError::NoValidPlacements);
    }

    for attempt in 0..MAX_ATTEMPTS {
        let Some(candidate) = candidates.choose(rng) else {
            break;
        };
        let letters = letters::resolve(&word, mode, rng);

        let collision = candidate
            .positions
            .iter()
            .zip(&letters)
            .find(|(coord, ch)| !board.can_accept(**coord, **ch));

        if let Some((coord, ch)) = collision {
            trace!(attempt, ?coord, %ch, kind = ?candidate.kind, "placement collided");
            continue;
        }

        for (&coord, &ch) in candidate.positions.iter().zip(&letters) {
            board.write(coord, ch);
        }

        debug!(attempt, kind = ?candidate.kind, start = ?candidate.positions[0], "placed word");
        return Ok(candidate.clone());
    }

    Err(PlacementError::MaxAttemptsExceeded)
}
