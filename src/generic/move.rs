use crate::Player;
use serde::{Deserialize, Serialize};

/// Row-major cell index on the 3x3 grid, in 0..9.
pub type Cell = usize;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub cell: Cell,
    pub player: Player,
}

impl Move {
    pub fn new(cell: Cell, player: Player) -> Self {
        Self { cell, player }
    }
}
