//! Agents: the seam between the game loop and a move source.

use crate::{minimax::minimax, MctsConfig, MctsEngine};
use checkers_engine::{all_moves, Board, Game, Move};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A move source for one side of the game.
///
/// `choose_move` returns the board the agent wants to adopt together
/// with the move producing it; `None` means the agent has no legal moves
/// and the driver scores the game against it.
pub trait Agent {
    /// Short name for logs and summaries.
    fn name(&self) -> &str;

    /// Decides a move for the side whose turn it is in `game`.
    fn choose_move(&mut self, game: &Game) -> Option<(Board, Move)>;
}

/// Fixed-depth minimax agent.
pub struct MinimaxAgent {
    depth: u32,
}

impl MinimaxAgent {
    /// Creates an agent searching to the given depth.
    pub fn new(depth: u32) -> Self {
        MinimaxAgent { depth }
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, game: &Game) -> Option<(Board, Move)> {
        let (_, best) = minimax(game.board(), self.depth, game.turn());
        best.map(|mut mv| {
            let board = mv.final_state().clone();
            (board, mv)
        })
    }
}

/// Monte Carlo tree search agent. Keeps its search tree between turns so
/// statistics accumulated on earlier decisions carry forward.
pub struct MctsAgent {
    engine: MctsEngine,
}

impl MctsAgent {
    /// Creates an agent around a freshly configured engine.
    pub fn new(config: MctsConfig) -> Self {
        MctsAgent {
            engine: MctsEngine::new(config),
        }
    }
}

impl Agent for MctsAgent {
    fn name(&self) -> &str {
        "mcts"
    }

    fn choose_move(&mut self, game: &Game) -> Option<(Board, Move)> {
        self.engine
            .choose_move(game.board(), game.turn(), game.no_progress_count())
    }
}

/// Plays a uniformly random legal move. The simplest possible agent,
/// useful as a baseline opponent.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Creates an agent, optionally seeded for reproducibility.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomAgent { rng }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game: &Game) -> Option<(Board, Move)> {
        let mut moves = all_moves(game.board(), game.turn());
        if moves.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..moves.len());
        let mut mv = moves.swap_remove(pick);
        let board = mv.final_state().clone();
        Some((board, mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{Color, Piece, Square};

    #[test]
    fn minimax_agent_moves_from_the_start() {
        let game = Game::new();
        let mut agent = MinimaxAgent::new(2);
        let (board, mv) = agent.choose_move(&game).unwrap();
        assert_eq!(mv.color(), Color::White);
        assert_ne!(board, *game.board());
    }

    #[test]
    fn mcts_agent_moves_from_the_start() {
        let game = Game::new();
        let mut agent = MctsAgent::new(MctsConfig::default().with_seed(5));
        let (board, mv) = agent.choose_move(&game).unwrap();
        assert_eq!(mv.color(), Color::White);
        assert_ne!(board, *game.board());
    }

    #[test]
    fn random_agent_is_reproducible_with_a_seed() {
        let game = Game::new();
        let mut a = RandomAgent::new(Some(12));
        let mut b = RandomAgent::new(Some(12));
        let (board_a, _) = a.choose_move(&game).unwrap();
        let (board_b, _) = b.choose_move(&game).unwrap();
        assert_eq!(board_a, board_b);
    }

    #[test]
    fn agents_report_no_move_when_blocked() {
        // Red's lone man in the corner cannot move or jump.
        let mut board = Board::empty();
        board.place(Piece::new(Square::new(7, 0), Color::Red));
        board.place(Piece::new(Square::new(6, 1), Color::White));
        board.place(Piece::new_king(Square::new(5, 2), Color::White));

        let mut game = Game::new();
        let mut seed_moves = all_moves(game.board(), Color::White);
        let mv = seed_moves.remove(0);
        game.ai_move(board, &mv).unwrap();
        assert_eq!(game.turn(), Color::Red);

        assert!(RandomAgent::new(Some(1)).choose_move(&game).is_none());
        assert!(MinimaxAgent::new(2).choose_move(&game).is_none());
        let mut mcts = MctsAgent::new(MctsConfig::default().with_seed(2));
        assert!(mcts.choose_move(&game).is_none());
    }
}
