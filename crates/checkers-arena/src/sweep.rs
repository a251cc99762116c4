//! Random parameter sweep for the MCTS tunables.
//!
//! Samples a population of (iterations, safe-piece weight, exploitation
//! weight) candidates, plays each one as Red against a fixed-depth
//! minimax benchmark, and reports the reward tally: 1 per win, 0.5 per
//! draw.

use crate::play_game;
use checkers_engine::{EvalWeights, GameOutcome};
use checkers_search::{MctsAgent, MctsConfig, MinimaxAgent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One sampled parameter set.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub iterations: u32,
    pub safe_weight: f32,
    pub exploitation: f64,
}

/// Samples `size` candidates: 5-40 iterations, weights in [0, 1).
fn init_population(rng: &mut StdRng, size: u32) -> Vec<Candidate> {
    (0..size)
        .map(|_| Candidate {
            iterations: rng.gen_range(5..=40),
            safe_weight: rng.gen_range(0.0..1.0),
            exploitation: rng.gen_range(0.0..1.0),
        })
        .collect()
}

/// Runs the sweep and prints the reward per candidate.
pub fn run(population: u32, games: u32, depth: u32, seed: Option<u64>, max_moves: u32) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let candidates = init_population(&mut rng, population);

    let mut best: Option<(Candidate, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let mut reward = 0.0;
        for game_no in 0..games {
            let mut white = MinimaxAgent::new(depth);
            let mut config = MctsConfig::default()
                .with_iterations(candidate.iterations)
                .with_exploitation_weight(candidate.exploitation)
                .with_eval(EvalWeights {
                    safe_piece: candidate.safe_weight,
                });
            if let Some(seed) = seed {
                config = config.with_seed(seed.wrapping_add(u64::from(game_no)));
            }
            let mut red = MctsAgent::new(config);

            let (outcome, plies) = play_game(&mut white, &mut red, max_moves);
            reward += match outcome {
                GameOutcome::RedWins => 1.0,
                GameOutcome::Draw => 0.5,
                GameOutcome::WhiteWins => 0.0,
            };
            tracing::debug!(
                "candidate {} game {}: {:?} in {} plies",
                index,
                game_no + 1,
                outcome,
                plies
            );
        }

        tracing::info!(
            "candidate {}: iterations={} safe_weight={:.3} exploitation={:.3} reward={:.1}",
            index,
            candidate.iterations,
            candidate.safe_weight,
            candidate.exploitation,
            reward
        );
        println!(
            "candidate {:>2}: iterations={:<3} safe_weight={:.3} exploitation={:.3} -> reward {:.1}/{}",
            index, candidate.iterations, candidate.safe_weight, candidate.exploitation, reward, games
        );

        let better = best.map_or(true, |(_, best_reward)| reward > best_reward);
        if better {
            best = Some((*candidate, reward));
        }
    }

    if let Some((candidate, reward)) = best {
        println!(
            "best: iterations={} safe_weight={:.3} exploitation={:.3} (reward {:.1}/{})",
            candidate.iterations, candidate.safe_weight, candidate.exploitation, reward, games
        );
    }
}
