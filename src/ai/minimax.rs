use crate::{Board, Cell, Player};

/// Base score of a win at the root; wins score `SCORE_WIN - depth` so the
/// search prefers the shortest path to a win, and losses score
/// `depth - SCORE_WIN` so it drags a lost position out.
const SCORE_WIN: i32 = 10;

/// Alpha-beta minimax over plain board positions, to `max_depth` plies.
///
/// The lookahead plays on an ordinary board: stones do not fade inside the
/// tree, so deep lines may hold more stones per player than the live game
/// window would allow. Reaching the depth horizon, or a board with no vacant
/// cell, scores a neutral 0 rather than evaluating the position.
pub fn choose(board: &Board, player: Player, max_depth: u8) -> Cell {
    let mut search = *board;
    let mut best: Option<(Cell, i32)> = None;
    for cell in board.legal_moves() {
        search.place(cell, player);
        let score = alphabeta(
            &mut search,
            player.other(),
            player,
            1,
            max_depth,
            i32::MIN,
            i32::MAX,
        );
        search.remove(cell, player);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((cell, score));
        }
    }
    let (cell, _) = best.expect("no legal moves left on an in-progress board");
    cell
}

/// Every `place` below is undone by the matching `remove` before the loop
/// continues or returns, so the shared search board is always restored.
fn alphabeta(
    board: &mut Board,
    to_move: Player,
    root: Player,
    depth: u8,
    max_depth: u8,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if board.has_win(root) {
        return SCORE_WIN - depth as i32;
    }
    if board.has_win(root.other()) {
        return depth as i32 - SCORE_WIN;
    }
    if depth == max_depth {
        return 0;
    }
    let moves = board.legal_moves();
    if moves.is_empty() {
        // only reachable inside the lookahead, never in live play
        return 0;
    }

    let maximizing = to_move == root;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for cell in moves {
        board.place(cell, to_move);
        let score = alphabeta(
            board,
            to_move.other(),
            root,
            depth + 1,
            max_depth,
            alpha,
            beta,
        );
        board.remove(cell, to_move);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Strategy;

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
    fn completes_its_own_line() {
        // X X .
        // O O .  <- X wins at 2 before anything else matters
        // . . .
        let board = board(&[0, 1], &[3, 4]);
        assert_eq!(choose(&board, Player::X, Strategy::DEFAULT_DEPTH), 2);
    }

    #[test]
    fn completes_the_diagonal() {
        // X . .
        // O X .  <- no O counter-threat, X takes 8
        // . O .
        let board = board(&[0, 4], &[3, 7]);
        assert_eq!(choose(&board, Player::X, Strategy::DEFAULT_DEPTH), 8);
    }

    #[test]
    fn blocks_the_forced_loss() {
        // X X .
        // . O .  <- every O move except 2 loses on the next ply
        // . . .
        let board = board(&[0, 1], &[4]);
        assert_eq!(choose(&board, Player::O, Strategy::DEFAULT_DEPTH), 2);
    }

    #[test]
    fn prefers_the_immediate_win() {
        // X . .      6 wins now through 0-3-6 and scores 10 - 1; any
        // X O .  <-  slower plan scores strictly less, and O even
        // . O .      threatens 1-4-7 if X dawdles
        let board = board(&[0, 3], &[4, 7]);
        assert_eq!(choose(&board, Player::X, Strategy::DEFAULT_DEPTH), 6);
    }

    #[test]
    fn horizon_cutoff_scores_neutral() {
        // with a single ply of lookahead nothing is decided from an empty
        // board, every child scores 0 and the first legal cell is kept
        let board = Board::new();
        assert_eq!(choose(&board, Player::X, 1), 0);
    }

    #[test]
    fn leaves_the_board_as_it_found_it() {
        let before = board(&[0, 4], &[3, 7]);
        let copy = before;
        let _ = choose(&before, Player::X, Strategy::DEFAULT_DEPTH);
        assert_eq!(before, copy);
    }
}
