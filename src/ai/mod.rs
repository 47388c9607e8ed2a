mod heuristic;
mod minimax;
mod random;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Cell, Game, GameState};

/// The three opponents, from weakest to strongest. Which side is driven by a
/// strategy, and when, is the caller's business; a strategy only ever reads
/// the game and works on board copies of its own.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform choice among the legal moves.
    Random,
    /// Ordered rule cascade: win, block, fork, block fork, center, opposite
    /// corner, corner, edge.
    Heuristic,
    /// Alpha-beta minimax to a fixed depth.
    Exhaustive { max_depth: u8 },
}

impl Strategy {
    pub const DEFAULT_DEPTH: u8 = 8;

    /// Picks a legal cell for the player whose turn it is.
    ///
    /// The game must be in progress: the window rule guarantees a legal move
    /// exists then, so running out of candidates (or being handed a finished
    /// game) is an invariant breach and panics rather than guessing.
    pub fn choose_move<R: Rng>(&self, game: &Game, rng: &mut R) -> Cell {
        let player = match game.get_state() {
            GameState::InProgress { next_player } => next_player,
            GameState::Won { .. } => panic!("choose_move called on a finished game"),
        };
        let board = game.get_board();
        match self {
            Strategy::Random => random::choose(&board, rng),
            Strategy::Heuristic => heuristic::choose(&board, player),
            Strategy::Exhaustive { max_depth } => minimax::choose(&board, player, *max_depth),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Exhaustive {
            max_depth: Self::DEFAULT_DEPTH,
        }
    }
}
