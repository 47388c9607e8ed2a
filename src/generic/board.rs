use itertools::Itertools;
use ndarray::Array2;
use std::fmt::Display;

use crate::{Cell, Field, Player};

/// One bit per cell and one mask per player, row-major.
///
/// # Cell layout
/// 0 | 1 | 2
/// - - - - -
/// 3 | 4 | 5
/// - - - - -
/// 6 | 7 | 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Board {
    masks: [u16; 2],
}

/// The eight winning lines as bit patterns: three rows, three columns,
/// both diagonals.
const WINNING_LINES: [u16; 8] = [
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    0b100_010_001,
    0b001_010_100,
];

impl Board {
    pub const SIZE: (usize, usize) = (3, 3);
    pub const N_CELLS: usize = Self::SIZE.0 * Self::SIZE.1;

    pub fn new() -> Self {
        Self::default()
    }

    fn bit(cell: Cell) -> u16 {
        1 << cell
    }

    fn occupancy(&self) -> u16 {
        self.masks[0] | self.masks[1]
    }

    pub fn is_vacant(&self, cell: Cell) -> bool {
        assert!(cell < Self::N_CELLS, "cell {} is out of bounds", cell);
        self.occupancy() & Self::bit(cell) == 0
    }

    pub fn field(&self, cell: Cell) -> Field {
        assert!(cell < Self::N_CELLS, "cell {} is out of bounds", cell);
        if self.masks[Player::X.index()] & Self::bit(cell) != 0 {
            Field::Occupied { player: Player::X }
        } else if self.masks[Player::O.index()] & Self::bit(cell) != 0 {
            Field::Occupied { player: Player::O }
        } else {
            Field::Vacant
        }
    }

    /// Records `cell` as owned by `player`.
    ///
    /// Callers are expected to pre-filter through [`Board::legal_moves`] or
    /// [`Board::is_vacant`]; an out-of-bounds or occupied cell here is an
    /// internal invariant breach and panics.
    pub fn place(&mut self, cell: Cell, player: Player) {
        assert!(cell < Self::N_CELLS, "cell {} is out of bounds", cell);
        assert!(
            self.occupancy() & Self::bit(cell) == 0,
            "cell {} is already occupied",
            cell
        );
        self.masks[player.index()] |= Self::bit(cell);
    }

    /// Clears ownership of `cell` for `player`. The window eviction rule and
    /// the search undo path are the only callers, and both know the cell is
    /// currently owned by `player`; anything else panics.
    pub fn remove(&mut self, cell: Cell, player: Player) {
        assert!(cell < Self::N_CELLS, "cell {} is out of bounds", cell);
        assert!(
            self.masks[player.index()] & Self::bit(cell) != 0,
            "cell {} is not owned by {}",
            cell,
            player
        );
        self.masks[player.index()] &= !Self::bit(cell);
    }

    /// Whether `player` currently holds a complete winning line.
    ///
    /// ```
    /// use tictactoe_fading::{Board, Player};
    ///
    /// // X X X <-- X wins
    /// // O O .
    /// // . . .
    /// let mut board = Board::new();
    /// for cell in [0, 1, 2] {
    ///     board.place(cell, Player::X);
    /// }
    /// for cell in [3, 4] {
    ///     board.place(cell, Player::O);
    /// }
    ///
    /// assert!(board.has_win(Player::X));
    /// assert!(!board.has_win(Player::O));
    /// ```
    pub fn has_win(&self, player: Player) -> bool {
        let mask = self.masks[player.index()];
        WINNING_LINES.iter().any(|line| mask & line == *line)
    }

    /// Vacant cells in ascending index order.
    pub fn legal_moves(&self) -> Vec<Cell> {
        let occupancy = self.occupancy();
        (0..Self::N_CELLS)
            .filter(|cell| occupancy & Self::bit(*cell) == 0)
            .collect()
    }

    /// Number of cells currently owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.masks[player.index()].count_ones() as usize
    }

    /// 3x3 occupancy snapshot for the presentation layer.
    pub fn view(&self) -> Array2<Field> {
        let mut data = Array2::from_elem(Self::SIZE, Field::Vacant);
        for (row, column) in (0..Self::SIZE.0).cartesian_product(0..Self::SIZE.1) {
            data[(row, column)] = self.field(row * Self::SIZE.1 + column);
        }
        data
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Self::SIZE.0 {
            for column in 0..Self::SIZE.1 {
                match self.field(row * Self::SIZE.1 + column) {
                    Field::Occupied { player } => write!(f, "{}", player)?,
                    Field::Vacant => write!(f, ".")?,
                }
                if column + 1 < Self::SIZE.1 {
                    write!(f, " ")?;
                }
            }
            if row + 1 < Self::SIZE.0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
