use std::fmt::Display;

use crate::Player;

/// Status of a game. There is no draw variant: the sliding move window caps
/// each player at three live cells, so at most six of nine cells are ever
/// occupied and a legal move always remains while the game runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Won { winner: Player },
    InProgress { next_player: Player },
}

impl GameState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::InProgress { .. })
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Won { winner } => Some(*winner),
            GameState::InProgress { .. } => None,
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Won { winner } => write!(f, "won by {}", winner),
            GameState::InProgress { next_player } => {
                write!(f, "in progress, {} to move", next_player)
            }
        }
    }
}
