//! Move generation.
//!
//! Legal destinations for a piece are produced by two mirrored recursive
//! diagonal scans, one walking toward decreasing columns and one toward
//! increasing columns. Men scan only the two forward diagonals for their
//! color; kings scan all four. A scan that hops an enemy piece re-scans
//! both diagonals from the landing square, merging capture lists, which
//! is how multi-jump chains are discovered.
//!
//! Simple moves and capture moves coexist in the returned map: captures
//! are not forced.

use crate::Board;
use checkers_core::{Color, Piece, Square};
use std::collections::BTreeMap;

/// Mapping from reachable destination square to the ordered list of
/// pieces captured on the way there. An empty list marks a simple move.
///
/// Keyed by [`Square`]'s row-major ordering, so iteration over the map is
/// deterministic.
pub type MoveMap = BTreeMap<Square, Vec<Piece>>;

const SIZE: i32 = Board::SIZE as i32;

impl Board {
    /// Generates every destination reachable by the given piece.
    ///
    /// Calling this twice on an unmodified board yields identical maps.
    pub fn valid_moves(&self, piece: Piece) -> MoveMap {
        let mut moves = MoveMap::new();
        let row = piece.row() as i32;
        let left = piece.col() as i32 - 1;
        let right = piece.col() as i32 + 1;

        if piece.color() == Color::Red || piece.is_king() {
            let stop = (row - 3).max(-1);
            moves.extend(self.scan_left(row - 1, stop, -1, piece.color(), left, &[]));
            moves.extend(self.scan_right(row - 1, stop, -1, piece.color(), right, &[]));
        }
        if piece.color() == Color::White || piece.is_king() {
            let stop = (row + 3).min(SIZE);
            moves.extend(self.scan_left(row + 1, stop, 1, piece.color(), left, &[]));
            moves.extend(self.scan_right(row + 1, stop, 1, piece.color(), right, &[]));
        }
        moves
    }

    /// Walks diagonal cells toward decreasing columns, from `start` up to
    /// the exclusive `stop` row. `skipped` carries the captures already
    /// accumulated on this path.
    fn scan_left(
        &self,
        start: i32,
        stop: i32,
        step: i32,
        color: Color,
        mut col: i32,
        skipped: &[Piece],
    ) -> MoveMap {
        let mut moves = MoveMap::new();
        let mut last: Option<Piece> = None;
        let mut row = start;

        while row != stop {
            if col < 0 {
                break;
            }
            match self.get_piece(Square::new(row as u8, col as u8)) {
                None => {
                    if !skipped.is_empty() && last.is_none() {
                        break;
                    }
                    let mut captured = Vec::new();
                    if let Some(jumped) = last {
                        captured.push(jumped);
                    }
                    captured.extend_from_slice(skipped);
                    moves.insert(Square::new(row as u8, col as u8), captured.clone());

                    if last.is_some() {
                        let next_stop = if step == -1 {
                            (row - 3).max(0)
                        } else {
                            (row + 3).min(SIZE)
                        };
                        moves.extend(
                            self.scan_left(row + step, next_stop, step, color, col - 1, &captured),
                        );
                        moves.extend(
                            self.scan_right(row + step, next_stop, step, color, col + 1, &captured),
                        );
                    }
                    break;
                }
                Some(piece) if piece.color() == color => break,
                Some(piece) => {
                    // Only one piece may be captured per hop.
                    if last.is_some() {
                        break;
                    }
                    last = Some(piece);
                }
            }
            col -= 1;
            row += step;
        }
        moves
    }

    /// Mirror of [`scan_left`](Self::scan_left) walking toward increasing
    /// columns.
    fn scan_right(
        &self,
        start: i32,
        stop: i32,
        step: i32,
        color: Color,
        mut col: i32,
        skipped: &[Piece],
    ) -> MoveMap {
        let mut moves = MoveMap::new();
        let mut last: Option<Piece> = None;
        let mut row = start;

        while row != stop {
            if col >= SIZE {
                break;
            }
            match self.get_piece(Square::new(row as u8, col as u8)) {
                None => {
                    if !skipped.is_empty() && last.is_none() {
                        break;
                    }
                    let mut captured = Vec::new();
                    if let Some(jumped) = last {
                        captured.push(jumped);
                    }
                    captured.extend_from_slice(skipped);
                    moves.insert(Square::new(row as u8, col as u8), captured.clone());

                    if last.is_some() {
                        let next_stop = if step == -1 {
                            (row - 3).max(0)
                        } else {
                            (row + 3).min(SIZE)
                        };
                        moves.extend(
                            self.scan_left(row + step, next_stop, step, color, col - 1, &captured),
                        );
                        moves.extend(
                            self.scan_right(row + step, next_stop, step, color, col + 1, &captured),
                        );
                    }
                    break;
                }
                Some(piece) if piece.color() == color => break,
                Some(piece) => {
                    if last.is_some() {
                        break;
                    }
                    last = Some(piece);
                }
            }
            col += 1;
            row += step;
        }
        moves
    }
}
