//! MCTS configuration parameters.

use checkers_engine::EvalWeights;

/// Configuration for the Monte Carlo tree search engine.
///
/// Every knob lives in this struct rather than in process-wide state,
/// so a parameter sweep can run engines with different settings side by
/// side. Passed to [`MctsEngine::new`](crate::MctsEngine::new).
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Select/expand/simulate/backpropagate cycles per decision.
    pub iterations: u32,

    /// Weight of the mean-reward term in the child score. Higher values
    /// favor exploitation over exploration.
    pub exploitation_weight: f64,

    /// Consecutive king moves without a capture before a rollout (or the
    /// game) is scored as a draw.
    pub no_progress_threshold: u32,

    /// How many of the best one-ply candidates a rollout chooses among.
    pub rollout_candidates: usize,

    /// Seed for the engine's RNG. `None` seeds from entropy; set it for
    /// reproducible searches.
    pub seed: Option<u64>,

    /// Weights for the positional evaluation used by rollouts.
    pub eval: EvalWeights,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 15,
            exploitation_weight: 1.0,
            no_progress_threshold: 20,
            rollout_candidates: 3,
            seed: None,
            eval: EvalWeights::default(),
        }
    }
}

impl MctsConfig {
    /// Builder pattern: set the iteration budget.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Builder pattern: set the exploitation weight.
    pub fn with_exploitation_weight(mut self, weight: f64) -> Self {
        self.exploitation_weight = weight;
        self
    }

    /// Builder pattern: set the no-progress draw threshold.
    pub fn with_no_progress_threshold(mut self, threshold: u32) -> Self {
        self.no_progress_threshold = threshold;
        self
    }

    /// Builder pattern: set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder pattern: set the evaluation weights.
    pub fn with_eval(mut self, eval: EvalWeights) -> Self {
        self.eval = eval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.iterations, 15);
        assert_eq!(config.no_progress_threshold, 20);
        assert_eq!(config.rollout_candidates, 3);
        assert!(config.seed.is_none());
    }

    #[test]
    fn builder_pattern() {
        let config = MctsConfig::default()
            .with_iterations(50)
            .with_exploitation_weight(0.7)
            .with_seed(42);
        assert_eq!(config.iterations, 50);
        assert!((config.exploitation_weight - 0.7).abs() < 1e-9);
        assert_eq!(config.seed, Some(42));
    }
}
