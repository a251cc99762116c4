//! Game control: turn alternation, draw detection, and move selection.

use crate::movegen::MoveMap;
use crate::{Board, Move};
use checkers_core::{Color, Square};
use thiserror::Error;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Red captured every White piece.
    RedWins,
    /// White captured every Red piece.
    WhiteWins,
    /// The no-progress counter crossed its threshold.
    Draw,
}

/// Error type for game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A move was submitted after the game had already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// A checkers game in progress.
///
/// The game owns the authoritative [`Board`]; search engines receive
/// clones of it and hand back the board they chose. The controller also
/// tracks the no-progress counter: consecutive king moves without a
/// capture, which declare a draw once they reach the threshold.
///
/// The selection interface (`select`) exists for an external input
/// collaborator driving a human player; the highlighted move map is the
/// read-only snapshot a renderer may display.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    valid_moves: MoveMap,
    king_moves: u32,
    draw_threshold: u32,
}

impl Game {
    /// King moves without a capture before the game is drawn.
    pub const DEFAULT_DRAW_THRESHOLD: u32 = 20;

    /// Creates a game from the standard starting position. White moves
    /// first.
    pub fn new() -> Self {
        Self::with_draw_threshold(Self::DEFAULT_DRAW_THRESHOLD)
    }

    /// Creates a game with a custom no-progress draw threshold.
    pub fn with_draw_threshold(draw_threshold: u32) -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
            selected: None,
            valid_moves: MoveMap::new(),
            king_moves: 0,
            draw_threshold,
        }
    }

    /// Returns the authoritative board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the current no-progress count (consecutive king moves
    /// without a capture).
    #[inline]
    pub fn no_progress_count(&self) -> u32 {
        self.king_moves
    }

    /// Returns the currently selected square, if any.
    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Destinations of the currently selected piece, for a renderer to
    /// highlight.
    #[inline]
    pub fn highlighted_moves(&self) -> &MoveMap {
        &self.valid_moves
    }

    /// Returns the game result, if the game has ended.
    pub fn winner(&self) -> Option<GameOutcome> {
        if self.king_moves >= self.draw_threshold {
            return Some(GameOutcome::Draw);
        }
        self.board.winner().map(|color| match color {
            Color::Red => GameOutcome::RedWins,
            Color::White => GameOutcome::WhiteWins,
        })
    }

    /// Handles a human selection of the given square.
    ///
    /// Selecting one of your own pieces highlights its moves and returns
    /// `true`. With a piece already selected, selecting a highlighted
    /// destination plays the move; selecting anything else drops the
    /// selection and retries the square as a fresh selection. Returns
    /// `false` when nothing was selected or played; the state is
    /// unchanged and the caller may retry.
    pub fn select(&mut self, square: Square) -> bool {
        if self.selected.is_some() {
            if self.try_move(square) {
                return true;
            }
            self.selected = None;
            self.valid_moves = MoveMap::new();
            return self.select(square);
        }

        match self.board.get_piece(square) {
            Some(piece) if piece.color() == self.turn => {
                self.selected = Some(square);
                self.valid_moves = self.board.valid_moves(piece);
                true
            }
            _ => false,
        }
    }

    /// Attempts to play the selected piece to `destination`. Returns
    /// `false` without changing state when the destination is not a
    /// highlighted legal move.
    fn try_move(&mut self, destination: Square) -> bool {
        let Some(from) = self.selected else {
            return false;
        };
        if self.board.get_piece(destination).is_some() {
            return false;
        }
        let Some(captured) = self.valid_moves.get(&destination).cloned() else {
            return false;
        };

        let piece = match self.board.get_piece(from) {
            Some(piece) => piece,
            None => return false,
        };
        self.board.move_piece(from, destination);
        if !captured.is_empty() {
            self.board.remove(&captured);
        }
        self.record_progress(piece.is_king(), captured.is_empty());
        self.change_turn();
        true
    }

    /// Adopts a board produced by a search engine as the new authoritative
    /// state. The chosen move is used to update the no-progress counter.
    pub fn ai_move(&mut self, board: Board, mv: &Move) -> Result<(), GameError> {
        if self.winner().is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        self.record_progress(mv.piece().is_king(), mv.captured().is_empty());
        self.board = board;
        self.change_turn();
        Ok(())
    }

    /// Resets the game to the starting position, keeping the configured
    /// draw threshold.
    pub fn reset(&mut self) {
        *self = Self::with_draw_threshold(self.draw_threshold);
    }

    fn record_progress(&mut self, king_moved: bool, quiet: bool) {
        if king_moved && quiet {
            self.king_moves += 1;
        } else {
            self.king_moves = 0;
        }
    }

    fn change_turn(&mut self) {
        self.selected = None;
        self.valid_moves = MoveMap::new();
        self.turn = self.turn.opposite();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
