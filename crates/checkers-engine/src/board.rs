//! Board state and evaluation.

use checkers_core::{Color, Piece, Square};
use std::fmt;

/// Weights for the tunable parts of [`Board::heuristic_eval`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalWeights {
    /// Multiplier applied to the safe-piece bonus (pieces on an edge row
    /// or edge column score +2 each before scaling).
    pub safe_piece: f32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights { safe_piece: 1.0 }
    }
}

/// An 8x8 checkers board.
///
/// The grid owns every live piece. Cloning a board yields a fully
/// independent copy, which is how search engines explore speculative
/// lines without touching the live game state. Equality compares the
/// full grid and counters and is used by the MCTS engine to match an
/// observed position against a previously built subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: [[Option<Piece>; Self::SIZE]; Self::SIZE],
    red_left: u8,
    white_left: u8,
    red_kings: u8,
    white_kings: u8,
}

impl Board {
    /// Number of rows and columns.
    pub const SIZE: usize = Square::SIZE as usize;

    /// Creates a board with the standard starting position: White men on
    /// the dark squares of rows 0-2, Red men on rows 5-7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..Self::SIZE as u8 {
            for col in 0..Self::SIZE as u8 {
                if col % 2 != (row + 1) % 2 {
                    continue;
                }
                let square = Square::new(row, col);
                if row < 3 {
                    board.place(Piece::new(square, Color::White));
                } else if row > 4 {
                    board.place(Piece::new(square, Color::Red));
                }
            }
        }
        board
    }

    /// Creates an empty board with zeroed counters.
    ///
    /// Useful for setting up custom positions; combine with [`place`](Self::place).
    pub fn empty() -> Self {
        Board {
            grid: [[None; Self::SIZE]; Self::SIZE],
            red_left: 0,
            white_left: 0,
            red_kings: 0,
            white_kings: 0,
        }
    }

    /// Places a piece on its own square, updating the piece and king
    /// counters.
    ///
    /// # Panics
    ///
    /// Panics if the square is already occupied.
    pub fn place(&mut self, piece: Piece) {
        let cell = &mut self.grid[piece.row() as usize][piece.col() as usize];
        assert!(cell.is_none(), "square {} is already occupied", piece.position());
        *cell = Some(piece);
        match piece.color() {
            Color::Red => {
                self.red_left += 1;
                if piece.is_king() {
                    self.red_kings += 1;
                }
            }
            Color::White => {
                self.white_left += 1;
                if piece.is_king() {
                    self.white_kings += 1;
                }
            }
        }
    }

    /// Returns a copy of the piece on the given square, if any.
    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    /// Returns copies of all live pieces of the given color.
    pub fn get_all_pieces(&self, color: Color) -> Vec<Piece> {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .filter(|piece| piece.color() == color)
            .copied()
            .collect()
    }

    /// Number of live Red pieces.
    #[inline]
    pub fn red_left(&self) -> u8 {
        self.red_left
    }

    /// Number of live White pieces.
    #[inline]
    pub fn white_left(&self) -> u8 {
        self.white_left
    }

    /// Number of Red kings.
    #[inline]
    pub fn red_kings(&self) -> u8 {
        self.red_kings
    }

    /// Number of White kings.
    #[inline]
    pub fn white_kings(&self) -> u8 {
        self.white_kings
    }

    /// Moves the piece on `from` to the empty square `to`, crowning it
    /// when it lands on row 0 or the last row.
    ///
    /// The crowning check fires on either edge row regardless of the
    /// piece's color; a piece that is already a king is left unchanged so
    /// the king counters never exceed the piece counters.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty or `to` is occupied. Either indicates a
    /// stale snapshot was mutated out of band.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let mut piece = self.grid[from.row() as usize][from.col() as usize]
            .take()
            .unwrap_or_else(|| panic!("no piece at {} to move", from));
        debug_assert!(
            self.grid[to.row() as usize][to.col() as usize].is_none(),
            "destination {} is occupied",
            to
        );
        piece.relocate(to);
        if to.is_crowning_row() && !piece.is_king() {
            piece.crown();
            match piece.color() {
                Color::Red => self.red_kings += 1,
                Color::White => self.white_kings += 1,
            }
        }
        self.grid[to.row() as usize][to.col() as usize] = Some(piece);
    }

    /// Removes the given captured pieces from the board, decrementing the
    /// matching color counters.
    pub fn remove(&mut self, captured: &[Piece]) {
        for piece in captured {
            self.grid[piece.row() as usize][piece.col() as usize] = None;
            match piece.color() {
                Color::Red => {
                    self.red_left -= 1;
                    if piece.is_king() {
                        self.red_kings -= 1;
                    }
                }
                Color::White => {
                    self.white_left -= 1;
                    if piece.is_king() {
                        self.white_kings -= 1;
                    }
                }
            }
        }
    }

    /// Returns the winning color once the other side has no pieces left.
    ///
    /// Counts are recomputed from the grid. A side with pieces but no
    /// legal moves is not detected here; that terminal condition belongs
    /// to the caller driving the game.
    pub fn winner(&self) -> Option<Color> {
        let mut red = 0u8;
        let mut white = 0u8;
        for piece in self.grid.iter().flatten().flatten() {
            match piece.color() {
                Color::Red => red += 1,
                Color::White => white += 1,
            }
        }
        if red == 0 {
            Some(Color::White)
        } else if white == 0 {
            Some(Color::Red)
        } else {
            None
        }
    }

    /// Cheap material differential used by the minimax leaf cutoff:
    /// positive values favor White.
    pub fn material_eval(&self) -> f32 {
        f32::from(self.white_left) - f32::from(self.red_left)
            + 0.5 * (f32::from(self.white_kings) - f32::from(self.red_kings))
    }

    /// Richer positional evaluation for the given color.
    ///
    /// Two additive heuristics: a man is worth `5 + rows advanced toward
    /// its crowning row`, a king a constant `5 + 8 + 2`; each piece on an
    /// edge row or edge column adds a safe-piece bonus of 2, scaled by
    /// [`EvalWeights::safe_piece`].
    pub fn heuristic_eval(&self, color: Color, weights: &EvalWeights) -> f32 {
        self.piece_row_value(color) + self.safe_piece_value(color) * weights.safe_piece
    }

    fn piece_row_value(&self, color: Color) -> f32 {
        let size = Self::SIZE as u8;
        let mut total = 0.0;
        for piece in self.get_all_pieces(color) {
            total += if piece.is_king() {
                f32::from(5 + size + 2)
            } else {
                let advanced = match color {
                    Color::Red => size - piece.row(),
                    Color::White => piece.row(),
                };
                f32::from(5 + advanced)
            };
        }
        total
    }

    fn safe_piece_value(&self, color: Color) -> f32 {
        let safe = self
            .get_all_pieces(color)
            .iter()
            .filter(|piece| piece.position().is_edge())
            .count();
        (safe * 2) as f32
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                let ch = match cell {
                    None => '.',
                    Some(p) => match (p.color(), p.is_king()) {
                        (Color::Red, false) => 'r',
                        (Color::Red, true) => 'R',
                        (Color::White, false) => 'w',
                        (Color::White, true) => 'W',
                    },
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
