mod board;
mod field;
mod game;
mod game_data;
mod gamestate;
mod r#move;
mod player;

pub use board::Board;
pub use field::Field;
pub use game::{Game, InvalidMove, MoveReceipt};
pub use game_data::GameData;
pub use gamestate::GameState;
pub use player::Player;
pub use r#move::{Cell, Move};
