//! Checkers piece representation.

use crate::{Color, Square};
use std::fmt;

/// A single checkers piece: a man or a king.
///
/// A piece carries its own position so that move generation and capture
/// bookkeeping can work with detached copies. The board owning the piece
/// is responsible for keeping the stored coordinates in sync with the
/// grid cell it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    position: Square,
    color: Color,
    king: bool,
}

impl Piece {
    /// Creates a new man of the given color.
    #[inline]
    pub const fn new(position: Square, color: Color) -> Self {
        Piece {
            position,
            color,
            king: false,
        }
    }

    /// Creates a new king of the given color.
    #[inline]
    pub const fn new_king(position: Square, color: Color) -> Self {
        Piece {
            position,
            color,
            king: true,
        }
    }

    /// Returns the piece's position.
    #[inline]
    pub const fn position(self) -> Square {
        self.position
    }

    /// Returns the row of the piece's position.
    #[inline]
    pub const fn row(self) -> u8 {
        self.position.row()
    }

    /// Returns the column of the piece's position.
    #[inline]
    pub const fn col(self) -> u8 {
        self.position.col()
    }

    /// Returns the piece's color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Returns true if the piece has been crowned.
    #[inline]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Moves the piece to a new square.
    #[inline]
    pub fn relocate(&mut self, to: Square) {
        self.position = to;
    }

    /// Crowns the piece.
    #[inline]
    pub fn crown(&mut self) {
        self.king = true;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.king { "king" } else { "man" };
        write!(f, "{} {} at {}", self.color, kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_piece_is_a_man() {
        let piece = Piece::new(Square::new(5, 2), Color::Red);
        assert_eq!(piece.color(), Color::Red);
        assert!(!piece.is_king());
        assert_eq!(piece.row(), 5);
        assert_eq!(piece.col(), 2);
    }

    #[test]
    fn relocate_updates_position() {
        let mut piece = Piece::new(Square::new(5, 2), Color::Red);
        piece.relocate(Square::new(4, 3));
        assert_eq!(piece.position(), Square::new(4, 3));
    }

    #[test]
    fn crown_promotes() {
        let mut piece = Piece::new(Square::new(0, 1), Color::Red);
        piece.crown();
        assert!(piece.is_king());
    }

    #[test]
    fn display() {
        let piece = Piece::new_king(Square::new(3, 4), Color::White);
        assert_eq!(format!("{}", piece), "White king at (3, 4)");
    }
}
