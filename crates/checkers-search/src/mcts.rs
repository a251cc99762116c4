//! Monte Carlo tree search.
//!
//! The tree lives in an arena of nodes indexed by [`NodeId`]; children
//! hold a non-owning id back to their parent, so backpropagation walks
//! plain indices and the arena alone owns every node. Each decision runs
//! a fixed budget of select/expand/simulate/backpropagate cycles and
//! then picks the best root child.
//!
//! Two deliberate departures from textbook MCTS: the final decision
//! reuses the selection score rather than the raw visit count, and
//! rollout rewards cross color levels through a literal
//! `(reward + 1) mod 2` complement during backpropagation.

use crate::MctsConfig;
use checkers_core::Color;
use checkers_engine::{all_moves, Board, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for the root's missing parent.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Returns true if this is the missing-parent sentinel.
    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// A node in the search tree: a board snapshot, the color about to move
/// from it, and the visit/reward statistics accumulated so far.
#[derive(Debug, Clone)]
pub struct Node {
    state: Board,
    to_move: Color,
    parent: NodeId,
    children: Vec<NodeId>,
    /// Moves leading to the children, parallel to `children`.
    edges: Vec<Move>,
    visits: u32,
    reward: f64,
    /// King moves without a capture on the path into this node; rollouts
    /// continue counting from here.
    no_progress: u32,
}

impl Node {
    fn new(state: Board, to_move: Color, parent: NodeId, no_progress: u32) -> Self {
        Node {
            state,
            to_move,
            parent,
            children: Vec::new(),
            edges: Vec::new(),
            visits: 1,
            reward: 0.0,
            no_progress,
        }
    }

    /// The board snapshot at this node.
    #[inline]
    pub fn state(&self) -> &Board {
        &self.state
    }

    /// The color to move from this node.
    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Times this node has been visited, including its initial visit.
    #[inline]
    pub fn visits(&self) -> u32 {
        self.visits
    }

    /// Accumulated reward from this node's perspective bookkeeping.
    #[inline]
    pub fn reward(&self) -> f64 {
        self.reward
    }
}

/// Arena-owned search tree.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Builds a tree containing only the given root node.
    pub fn with_root(state: Board, to_move: Color, no_progress: u32) -> Self {
        Tree {
            nodes: vec![Node::new(state, to_move, NodeId::NONE, no_progress)],
            root: NodeId(0),
        }
    }

    /// The root id.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrows a node.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Extracts the subtree rooted at `id` into a fresh arena, discarding
    /// the rest of the tree. The extracted node becomes a parentless
    /// root while keeping its statistics.
    fn extract(&self, id: NodeId) -> Tree {
        let mut out = Tree {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        self.copy_into(id, NodeId::NONE, &mut out);
        out
    }

    fn copy_into(&self, id: NodeId, parent: NodeId, out: &mut Tree) -> NodeId {
        let src = self.node(id);
        let new_id = out.push(Node {
            state: src.state.clone(),
            to_move: src.to_move,
            parent,
            children: Vec::new(),
            edges: src.edges.clone(),
            visits: src.visits,
            reward: src.reward,
            no_progress: src.no_progress,
        });
        for &child in &src.children {
            let copied = self.copy_into(child, new_id, out);
            out.node_mut(new_id).children.push(copied);
        }
        new_id
    }
}

/// Monte Carlo tree search engine.
///
/// The engine keeps the subtree below its last decision alive; when the
/// next observed position matches one of that subtree's children (state
/// equality), the accumulated statistics carry over into the new search.
pub struct MctsEngine {
    config: MctsConfig,
    rng: StdRng,
    tree: Option<Tree>,
}

impl MctsEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: MctsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        MctsEngine { config, rng, tree: None }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Discards any tree kept from previous turns.
    pub fn reset(&mut self) {
        self.tree = None;
    }

    /// Decides a move for `to_move` on `board`.
    ///
    /// `no_progress` is the controller's current count of king moves
    /// without a capture; a fresh root starts its rollouts from it.
    /// Returns the chosen resulting board together with the move that
    /// produces it, or `None` when the side to move has no legal moves
    /// (the caller treats that as a loss).
    pub fn choose_move(
        &mut self,
        board: &Board,
        to_move: Color,
        no_progress: u32,
    ) -> Option<(Board, Move)> {
        let mut tree = self.reuse_or_build(board, to_move, no_progress);

        for _ in 0..self.config.iterations {
            let leaf = self.select(&mut tree);
            let reward = self.simulate(&tree, leaf);
            self.backpropagate(&mut tree, leaf, reward);
        }

        let best = self.best_child(&tree, tree.root())?;
        let root = tree.node(tree.root());
        let position = root.children.iter().position(|&c| c == best)?;
        let chosen = root.edges[position].clone();
        let next_board = tree.node(best).state.clone();

        self.tree = Some(tree.extract(best));
        Some((next_board, chosen))
    }

    /// Reuses the stored subtree when one of its root's children matches
    /// the observed board; otherwise starts a fresh tree.
    fn reuse_or_build(&mut self, board: &Board, to_move: Color, no_progress: u32) -> Tree {
        if let Some(tree) = self.tree.take() {
            let root = tree.node(tree.root());
            let matching = root
                .children
                .iter()
                .copied()
                .find(|&child| tree.node(child).state == *board);
            if let Some(child) = matching {
                return tree.extract(child);
            }
        }
        Tree::with_root(board.clone(), to_move, no_progress)
    }

    /// Tree policy: descends from the root until it reaches a terminal
    /// node or expands a new child.
    fn select(&mut self, tree: &mut Tree) -> NodeId {
        let mut current = tree.root();
        loop {
            let node = tree.node(current);
            if node.state.winner().is_some() {
                return current;
            }
            let legal = all_moves(&node.state, node.to_move);
            if legal.is_empty() {
                return current;
            }
            if node.children.len() < legal.len() {
                return self.expand(tree, current, legal);
            }
            match self.best_child(tree, current) {
                Some(child) => current = child,
                None => return current,
            }
        }
    }

    /// Expands one untried move of `id`, chosen uniformly at random, and
    /// returns the new child.
    fn expand(&mut self, tree: &mut Tree, id: NodeId, legal: Vec<Move>) -> NodeId {
        let node = tree.node(id);
        let mut untried: Vec<Move> = legal
            .into_iter()
            .filter(|mv| !node.edges.iter().any(|edge| edge.is_equivalent_to(mv)))
            .collect();
        debug_assert!(!untried.is_empty(), "expand called on a fully expanded node");

        let pick = self.rng.gen_range(0..untried.len());
        let mut mv = untried.swap_remove(pick);
        mv.compute_final_state();

        let no_progress = if mv.piece().is_king() && mv.captured().is_empty() {
            tree.node(id).no_progress + 1
        } else {
            0
        };
        let child = Node::new(
            mv.final_state().clone(),
            tree.node(id).to_move.opposite(),
            id,
            no_progress,
        );
        let child_id = tree.push(child);
        let node = tree.node_mut(id);
        node.children.push(child_id);
        node.edges.push(mv);
        child_id
    }

    /// Plays a heuristic-guided rollout from the given node.
    ///
    /// Each step ranks the legal moves by their one-ply lookahead value
    /// and picks uniformly among the best few. The rollout ends when a
    /// side runs out of pieces or moves, or when the no-progress counter
    /// reaches the draw threshold. Returns 1 if the launching node's
    /// color wins, 0.5 for a draw, 0 otherwise.
    fn simulate(&mut self, tree: &Tree, id: NodeId) -> f64 {
        let node = tree.node(id);
        let launch_color = node.to_move;
        let mut state = node.state.clone();
        let mut color = node.to_move;
        let mut counter = node.no_progress;

        let winner = loop {
            if let Some(winner) = state.winner() {
                break Some(winner);
            }
            if counter >= self.config.no_progress_threshold {
                break None;
            }
            let legal = all_moves(&state, color);
            if legal.is_empty() {
                break Some(color.opposite());
            }

            let weights = self.config.eval;
            let mut scored: Vec<(f32, Move)> = legal
                .into_iter()
                .map(|mut mv| (mv.value(&weights), mv))
                .collect();
            scored.sort_by(|a, b| b.0.total_cmp(&a.0));
            let candidates = self.config.rollout_candidates.max(1).min(scored.len());
            let pick = self.rng.gen_range(0..candidates);
            let (_, mv) = scored.swap_remove(pick);

            counter = if mv.piece().is_king() && mv.captured().is_empty() {
                counter + 1
            } else {
                0
            };
            state = mv.into_final_state();
            color = color.opposite();
        };

        match winner {
            Some(winner) if winner == launch_color => 1.0,
            Some(_) => 0.0,
            None => 0.5,
        }
    }

    /// Walks from the simulated node up through the parent ids to the
    /// root, bumping visit counts and folding the reward in. Levels whose
    /// color to move differs from the root's receive the complementary
    /// outcome `(reward + 1) mod 2`.
    fn backpropagate(&mut self, tree: &mut Tree, id: NodeId, reward: f64) {
        let root_color = tree.node(tree.root()).to_move;
        let mut current = id;
        while !current.is_none() {
            let node = tree.node_mut(current);
            node.visits += 1;
            if node.to_move == root_color {
                node.reward += reward;
            } else {
                node.reward += (reward + 1.0) % 2.0;
            }
            current = node.parent;
        }
    }

    /// Scores every child of `id` and returns the best, breaking ties
    /// uniformly at random. Returns `None` for a childless node, which
    /// the caller reads as "no moves".
    fn best_child(&mut self, tree: &Tree, id: NodeId) -> Option<NodeId> {
        let node = tree.node(id);
        if node.children.is_empty() {
            return None;
        }

        let mut best_score = f64::NEG_INFINITY;
        let mut best: Vec<NodeId> = Vec::new();
        for &child_id in &node.children {
            let child = tree.node(child_id);
            let visits = f64::from(child.visits);
            let score = self.config.exploitation_weight * (child.reward / visits)
                + (visits.log2() / visits).sqrt();
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(child_id);
            } else if score == best_score {
                best.push(child_id);
            }
        }
        best.choose(&mut self.rng).copied()
    }
}
