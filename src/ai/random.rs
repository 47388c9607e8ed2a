use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Board, Cell};

/// Uniform choice among the vacant cells.
pub fn choose<R: Rng>(board: &Board, rng: &mut R) -> Cell {
    *board
        .legal_moves()
        .choose(rng)
        .expect("no legal moves left on an in-progress board")
}
