use crate::{Board, Cell, Field, Player};

const CENTER: Cell = 4;
const CORNERS: [Cell; 4] = [0, 2, 6, 8];
const EDGES: [Cell; 4] = [1, 3, 5, 7];
/// Each corner paired with its diagonal opposite.
const OPPOSITE_CORNERS: [(Cell, Cell); 4] = [(0, 8), (2, 6), (6, 2), (8, 0)];

/// Rule-cascade opponent. Rules are tried in strict priority order and the
/// first hit wins; within a rule, candidate cells are tried in ascending
/// index order. All simulation runs on board copies.
///
/// 1. win now
/// 2. block the opponent's win
/// 3. create a fork
/// 4. block the opponent's fork
/// 5. take the center
/// 6. take the corner opposite an opponent corner
/// 7. take a free corner
/// 8. take a free edge
/// 9. first legal cell (unreachable, 5 through 8 cover the board)
pub fn choose(board: &Board, player: Player) -> Cell {
    let opponent = player.other();

    if let Some(cell) = winning_move(board, player) {
        return cell;
    }
    if let Some(cell) = winning_move(board, opponent) {
        return cell;
    }
    if let Some(cell) = forking_move(board, player) {
        return cell;
    }
    if let Some(cell) = forking_move(board, opponent) {
        return cell;
    }
    if board.is_vacant(CENTER) {
        return CENTER;
    }
    for (corner, opposite) in OPPOSITE_CORNERS {
        if board.field(corner) == (Field::Occupied { player: opponent })
            && board.is_vacant(opposite)
        {
            return opposite;
        }
    }
    if let Some(cell) = CORNERS.into_iter().find(|cell| board.is_vacant(*cell)) {
        return cell;
    }
    if let Some(cell) = EDGES.into_iter().find(|cell| board.is_vacant(*cell)) {
        return cell;
    }
    *board
        .legal_moves()
        .first()
        .expect("no legal moves left on an in-progress board")
}

/// A cell that gives `player` a complete line right away.
fn winning_move(board: &Board, player: Player) -> Option<Cell> {
    board.legal_moves().into_iter().find(|cell| {
        let mut probe = *board;
        probe.place(*cell, player);
        probe.has_win(player)
    })
}

/// A cell after which `player` threatens a win on at least two distinct
/// follow-up cells.
fn forking_move(board: &Board, player: Player) -> Option<Cell> {
    board.legal_moves().into_iter().find(|cell| {
        let mut probe = *board;
        probe.place(*cell, player);
        let threats = probe
            .legal_moves()
            .into_iter()
            .filter(|follow_up| {
                let mut follow_probe = probe;
                follow_probe.place(*follow_up, player);
                follow_probe.has_win(player)
            })
            .count();
        threats >= 2
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn board(x_cells: &[Cell], o_cells: &[Cell]) -> Board {
        let mut board = Board::new();
        for cell in x_cells {
            board.place(*cell, Player::X);
        }
        for cell in o_cells {
            board.place(*cell, Player::O);
        }
        board
    }

    #[test]
    fn takes_the_win_over_the_block() {
        // X X .     X completes the top row at 2 even though O
        // O O .  <- threatens 5
        // . . .
        let board = board(&[0, 1], &[3, 4]);
        assert_eq!(choose(&board, Player::X), 2);
    }

    #[test]
    fn blocks_the_opponents_win() {
        // X X .
        // . O .  <- O must take 2
        // . . .
        let board = board(&[0, 1], &[4]);
        assert_eq!(choose(&board, Player::O), 2);
    }

    #[test]
    fn creates_a_fork() {
        // . X .     placing 0 threatens both 0-1-2 and 0-3-6;
        // X . O  <- no immediate win or block applies
        // . O .
        let board = board(&[1, 3], &[5, 7]);
        assert!(winning_move(&board, Player::X).is_none());
        assert!(winning_move(&board, Player::O).is_none());
        assert_eq!(choose(&board, Player::X), 0);
    }

    #[test]
    fn blocks_the_opponents_fork() {
        // . X .     with only the center stone O has no fork of its own
        // X O .  <- and must deny X the fork at 0
        // . . .
        let board = board(&[1, 3], &[4]);
        assert!(forking_move(&board, Player::O).is_none());
        assert_eq!(choose(&board, Player::O), 0);
    }

    #[test]
    fn prefers_the_center() {
        let board = board(&[0], &[]);
        assert_eq!(choose(&board, Player::O), CENTER);
    }

    #[test]
    fn takes_the_opposite_corner() {
        // X . .
        // . O .  <- O answers the corner with the opposite corner
        // . . .
        let board = board(&[0], &[4]);
        assert_eq!(choose(&board, Player::O), 8);
    }

    #[test]
    fn falls_back_to_a_free_corner() {
        // center taken, no threats anywhere: first corner it is
        let board = board(&[], &[4]);
        assert_eq!(choose(&board, Player::X), 0);
    }

    #[test]
    fn fork_detection_counts_independent_threats() {
        // X at 0 and 8: cell 2 threatens 0-4-8 and 2-5-8 at once
        let board = board(&[0, 8], &[1, 3]);
        assert_eq!(forking_move(&board, Player::X), Some(2));
    }
}
