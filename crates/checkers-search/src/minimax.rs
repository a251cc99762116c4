//! Fixed-depth minimax search.
//!
//! Plain two-player zero-sum search with no pruning: every move of the
//! side to move is materialized and recursed into at `depth - 1`. White
//! maximizes the cheap material differential, Red minimizes it.

use checkers_core::Color;
use checkers_engine::{all_moves, Board, Move};

/// Searches the game tree below `board` to the given depth and returns
/// the evaluation together with the best move for the side to move.
///
/// - At depth 0, or on a board that already has a winner, the material
///   differential is returned with no move.
/// - The first move achieving the extremal value wins ties, so the
///   search is fully deterministic.
/// - A side with no moves returns no move and an infinite value against
///   it; the caller treats an empty root result as a pass/loss.
pub fn minimax(board: &Board, depth: u32, to_move: Color) -> (f32, Option<Move>) {
    if depth == 0 || board.winner().is_some() {
        return (board.material_eval(), None);
    }

    let maximizing = to_move == Color::White;
    let mut best_value = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };
    let mut best_move = None;

    for mut mv in all_moves(board, to_move) {
        let (value, _) = minimax(mv.final_state(), depth - 1, to_move.opposite());
        let improved = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improved {
            best_value = value;
            best_move = Some(mv);
        }
    }

    (best_value, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{Piece, Square};

    #[test]
    fn depth_zero_returns_material_eval() {
        let board = Board::new();
        let (value, mv) = minimax(&board, 0, Color::White);
        assert_eq!(value, board.material_eval());
        assert!(mv.is_none());
    }

    #[test]
    fn decided_board_is_terminal() {
        let mut board = Board::empty();
        board.place(Piece::new(Square::new(5, 2), Color::Red));
        let (value, mv) = minimax(&board, 3, Color::White);
        assert_eq!(value, board.material_eval());
        assert!(mv.is_none());
    }

    #[test]
    fn search_is_deterministic() {
        let board = Board::new();
        let (value_a, move_a) = minimax(&board, 2, Color::White);
        let (value_b, move_b) = minimax(&board, 2, Color::White);
        assert_eq!(value_a, value_b);
        let (move_a, move_b) = (move_a.unwrap(), move_b.unwrap());
        assert!(move_a.is_equivalent_to(&move_b));
    }

    #[test]
    fn evaluation_sign_tracks_material_majority() {
        let mut board = Board::empty();
        board.place(Piece::new(Square::new(2, 1), Color::White));
        board.place(Piece::new(Square::new(2, 3), Color::White));
        board.place(Piece::new(Square::new(5, 4), Color::Red));
        let (value, _) = minimax(&board, 2, Color::White);
        assert!(value > 0.0);

        let mut board = Board::empty();
        board.place(Piece::new(Square::new(5, 2), Color::Red));
        board.place(Piece::new(Square::new(5, 6), Color::Red));
        board.place(Piece::new(Square::new(1, 2), Color::White));
        let (value, _) = minimax(&board, 2, Color::Red);
        assert!(value < 0.0);
    }

    #[test]
    fn depth_one_picks_the_best_immediate_move() {
        let board = Board::new();
        let (value, best) = minimax(&board, 1, Color::White);
        assert!(best.is_some());
        // Depth 1 for the maximizer reduces to argmax over the material
        // evaluation of every resulting board.
        let best_possible = all_moves(&board, Color::White)
            .into_iter()
            .map(|mv| mv.into_final_state().material_eval())
            .fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(value, best_possible);
    }

    #[test]
    fn takes_a_winning_capture() {
        let mut board = Board::empty();
        board.place(Piece::new(Square::new(3, 2), Color::White));
        board.place(Piece::new(Square::new(4, 3), Color::Red));
        // White to move can jump (4, 3) and end the game.
        let (value, best) = minimax(&board, 2, Color::White);
        let best = best.unwrap();
        assert_eq!(best.captured().len(), 1);
        assert_eq!(best.destination(), Square::new(5, 4));
        assert!(value > 0.0);
    }

    #[test]
    fn side_with_no_moves_scores_against_it() {
        // Red's lone man in the corner is blocked: the adjacent White
        // piece cannot be jumped because the landing square is occupied.
        let mut board = Board::empty();
        board.place(Piece::new(Square::new(7, 0), Color::Red));
        board.place(Piece::new(Square::new(6, 1), Color::White));
        board.place(Piece::new_king(Square::new(5, 2), Color::White));
        let (value, best) = minimax(&board, 1, Color::Red);
        assert!(best.is_none());
        assert!(value.is_infinite() && value > 0.0, "loss for the minimizer");
    }
}
