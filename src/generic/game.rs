use std::collections::VecDeque;

use log::debug;
use ndarray::Array2;
use uuid::Uuid;

use crate::{Board, Cell, Field, GameData, GameState, Move, Player};

/// Why a move at the game boundary was not applied. These are normal
/// outcomes for untrusted callers, not faults; the board itself is never
/// touched when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    FieldOccupied,
    GameEnded,
    OutOfBounds,
}

/// What an accepted move did: the status it left the game in, and the cell
/// that faded off the board to make room, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReceipt {
    pub state: GameState,
    pub evicted: Option<Cell>,
}

/// A fading tic-tac-toe game.
///
/// Each player keeps at most `window_size` cells alive on the board; placing
/// one more evicts that player's oldest cell first, and only then is the win
/// test run. A stone can therefore never win through the cell it is pushing
/// out, while a fourth move completing a line among the three surviving
/// stones wins normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    windows: [VecDeque<Cell>; 2],
    window_size: usize,
    state: GameState,
    pub moves: Vec<Move>,
    pub game_id: Uuid,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Live cells allowed per player before the oldest fades.
    pub const DEFAULT_WINDOW: usize = 3;

    pub fn new() -> Self {
        Self::new_with_id(Uuid::new_v4())
    }

    pub fn new_with_id(id: Uuid) -> Self {
        Self::with_window_and_id(Self::DEFAULT_WINDOW, id)
    }

    /// A game with a custom window cap.
    ///
    /// The cap must leave a winning line reachable (three stones) and must
    /// keep the board from ever filling, which is what rules out draws.
    pub fn with_window(window_size: usize) -> Self {
        Self::with_window_and_id(window_size, Uuid::new_v4())
    }

    fn with_window_and_id(window_size: usize, id: Uuid) -> Self {
        assert!(window_size >= 3, "window of {} cannot fit a line", window_size);
        assert!(
            2 * window_size < Board::N_CELLS,
            "window of {} would let the board fill up",
            window_size
        );
        Self {
            board: Board::new(),
            windows: [VecDeque::new(), VecDeque::new()],
            window_size,
            state: GameState::InProgress {
                next_player: Player::STARTING,
            },
            moves: Vec::new(),
            game_id: id,
        }
    }

    /// Applies a move for the player whose turn it is.
    ///
    /// Rejections leave the game untouched. On acceptance the mover's oldest
    /// cell is evicted before the win test whenever the window overflows, so
    /// the reported state always reflects the post-eviction board. A winning
    /// move does not hand the turn over.
    pub fn insert_move(&mut self, cell: Cell) -> Result<MoveReceipt, InvalidMove> {
        let player = match self.state {
            GameState::Won { .. } => return Err(InvalidMove::GameEnded),
            GameState::InProgress { next_player } => next_player,
        };
        if cell >= Board::N_CELLS {
            return Err(InvalidMove::OutOfBounds);
        }
        if !self.board.is_vacant(cell) {
            return Err(InvalidMove::FieldOccupied);
        }

        self.board.place(cell, player);
        self.moves.push(Move::new(cell, player));

        let window = &mut self.windows[player.index()];
        window.push_back(cell);
        let evicted = if window.len() > self.window_size {
            let oldest = window
                .pop_front()
                .expect("window cannot be empty after a push");
            self.board.remove(oldest, player);
            debug!("cell {} of player {} faded", oldest, player);
            Some(oldest)
        } else {
            None
        };

        self.state = if self.board.has_win(player) {
            GameState::Won { winner: player }
        } else {
            GameState::InProgress {
                next_player: player.other(),
            }
        };
        Ok(MoveReceipt {
            state: self.state,
            evicted,
        })
    }

    /// Back to an empty board, with the same game id and window cap.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.windows = [VecDeque::new(), VecDeque::new()];
        self.state = GameState::InProgress {
            next_player: Player::STARTING,
        };
        self.moves.clear();
    }

    pub fn get_state(&self) -> GameState {
        self.state
    }

    pub fn get_next_player(&self) -> Option<Player> {
        match self.state {
            GameState::InProgress { next_player } => Some(next_player),
            GameState::Won { .. } => None,
        }
    }

    pub fn get_board(&self) -> Board {
        self.board
    }

    /// The player's live cells, oldest first.
    pub fn get_window(&self, player: Player) -> &VecDeque<Cell> {
        &self.windows[player.index()]
    }

    pub fn get_window_size(&self) -> usize {
        self.window_size
    }

    /// Live cell count, read off the board rather than the window.
    pub fn live_count(&self, player: Player) -> usize {
        self.board.count(player)
    }

    pub fn get_view(&self) -> Array2<Field> {
        self.board.view()
    }
}

impl From<GameData> for Game {
    fn from(game_data: GameData) -> Self {
        let mut game = Game::new_with_id(game_data.game_id);
        for m in game_data.moves {
            assert_eq!(
                game.get_next_player(),
                Some(m.player),
                "game data is out of turn order"
            );
            game.insert_move(m.cell).expect("invalid move in game data");
        }
        game
    }
}

impl From<Game> for GameData {
    fn from(game: Game) -> Self {
        GameData {
            moves: game.moves,
            game_id: game.game_id,
        }
    }
}
