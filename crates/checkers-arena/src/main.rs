//! Checkers agent comparison tool.
//!
//! Pits minimax, MCTS, and random agents against each other headlessly,
//! tallies results over a series of games, and random-searches MCTS
//! tunables with the `sweep` subcommand.

mod config;
mod sweep;

use checkers_core::Color;
use checkers_engine::{EvalWeights, Game, GameOutcome};
use checkers_search::{Agent, MctsAgent, MctsConfig, MinimaxAgent, RandomAgent};
use clap::{Parser, Subcommand, ValueEnum};
use config::{ArenaConfig, EngineDefaults};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "checkers-arena")]
#[command(about = "Checkers agent comparison tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a series of games between two agents
    Play {
        /// Agent playing White (moves first)
        white: AgentKind,
        /// Agent playing Red
        red: AgentKind,
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: u32,
        /// Minimax search depth
        #[arg(long)]
        depth: Option<u32>,
        /// MCTS iterations per decision
        #[arg(long)]
        iterations: Option<u32>,
        /// MCTS exploitation weight
        #[arg(long)]
        exploitation: Option<f64>,
        /// Safe-piece evaluation weight
        #[arg(long)]
        safe_weight: Option<f32>,
        /// Seed for MCTS and random agents
        #[arg(long)]
        seed: Option<u64>,
        /// Plies per game before the arena declares a draw
        #[arg(long)]
        max_moves: Option<u32>,
        /// Print a JSON summary instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Random-search MCTS tunables against a minimax benchmark
    Sweep {
        /// Number of candidate parameter sets to try
        #[arg(short, long, default_value = "3")]
        population: u32,
        /// Games played per candidate
        #[arg(short, long, default_value = "3")]
        games: u32,
        /// Minimax depth of the benchmark opponent
        #[arg(long, default_value = "3")]
        depth: u32,
        /// Seed for candidate sampling and the agents
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Selectable agent types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Minimax,
    Mcts,
    Random,
}

/// Per-run agent settings: config file defaults with CLI overrides.
#[derive(Debug, Clone, Copy)]
struct AgentSettings {
    depth: u32,
    iterations: u32,
    exploitation: f64,
    safe_weight: f32,
    seed: Option<u64>,
}

fn build_agent(kind: AgentKind, settings: &AgentSettings) -> Box<dyn Agent> {
    match kind {
        AgentKind::Minimax => Box::new(MinimaxAgent::new(settings.depth)),
        AgentKind::Mcts => {
            let mut config = MctsConfig::default()
                .with_iterations(settings.iterations)
                .with_exploitation_weight(settings.exploitation)
                .with_eval(EvalWeights {
                    safe_piece: settings.safe_weight,
                });
            if let Some(seed) = settings.seed {
                config = config.with_seed(seed);
            }
            Box::new(MctsAgent::new(config))
        }
        AgentKind::Random => Box::new(RandomAgent::new(settings.seed)),
    }
}

/// Plays a single game between the two agents, capping runaway games at
/// `max_moves` plies. A side whose agent reports no legal moves loses.
fn play_game<'a>(white: &'a mut dyn Agent, red: &'a mut dyn Agent, max_moves: u32) -> (GameOutcome, u32) {
    let mut game = Game::new();
    let mut plies = 0;

    loop {
        if let Some(outcome) = game.winner() {
            return (outcome, plies);
        }
        if plies >= max_moves {
            tracing::debug!("move cap {} reached, scoring a draw", max_moves);
            return (GameOutcome::Draw, plies);
        }
        let agent = match game.turn() {
            Color::White => &mut *white,
            Color::Red => &mut *red,
        };
        match agent.choose_move(&game) {
            Some((board, mv)) => {
                if let Err(e) = game.ai_move(board, &mv) {
                    tracing::error!("rejected move: {}", e);
                    return (GameOutcome::Draw, plies);
                }
                plies += 1;
            }
            None => {
                let outcome = match game.turn() {
                    Color::White => GameOutcome::RedWins,
                    Color::Red => GameOutcome::WhiteWins,
                };
                return (outcome, plies);
            }
        }
    }
}

fn outcome_label(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::WhiteWins => "white",
        GameOutcome::RedWins => "red",
        GameOutcome::Draw => "draw",
    }
}

/// One finished game in a series.
#[derive(Debug, Serialize)]
struct GameRecord {
    game: u32,
    outcome: &'static str,
    plies: u32,
}

/// Summary of a full series, printable as JSON with `--json`.
#[derive(Debug, Serialize)]
struct MatchSummary {
    white: String,
    red: String,
    games: u32,
    white_wins: u32,
    red_wins: u32,
    draws: u32,
    results: Vec<GameRecord>,
}

fn run_match(
    white: AgentKind,
    red: AgentKind,
    games: u32,
    settings: AgentSettings,
    max_moves: u32,
    json: bool,
) {
    let mut white_agent = build_agent(white, &settings);
    // Offset the seed so mirrored agent kinds do not share an RNG stream.
    let red_settings = AgentSettings {
        seed: settings.seed.map(|s| s.wrapping_add(1)),
        ..settings
    };
    let mut red_agent = build_agent(red, &red_settings);

    let mut summary = MatchSummary {
        white: white_agent.name().to_string(),
        red: red_agent.name().to_string(),
        games,
        white_wins: 0,
        red_wins: 0,
        draws: 0,
        results: Vec::new(),
    };

    tracing::info!(
        "Running {} games: {} (White) vs {} (Red)",
        games,
        summary.white,
        summary.red
    );

    for game_no in 1..=games {
        let (outcome, plies) = play_game(white_agent.as_mut(), red_agent.as_mut(), max_moves);
        match outcome {
            GameOutcome::WhiteWins => summary.white_wins += 1,
            GameOutcome::RedWins => summary.red_wins += 1,
            GameOutcome::Draw => summary.draws += 1,
        }
        tracing::info!(
            "Game {}/{}: {} in {} plies",
            game_no,
            games,
            outcome_label(outcome),
            plies
        );
        summary.results.push(GameRecord {
            game: game_no,
            outcome: outcome_label(outcome),
            plies,
        });
    }

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(out) => println!("{}", out),
            Err(e) => tracing::error!("failed to serialize summary: {}", e),
        }
    } else {
        println!(
            "{} (White) {} - {} {} (Red), {} draws",
            summary.white, summary.white_wins, summary.red_wins, summary.red, summary.draws
        );
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = ArenaConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default config: {}", e);
        ArenaConfig::default()
    });
    let EngineDefaults {
        depth: default_depth,
        iterations: default_iterations,
        exploitation: default_exploitation,
        safe_weight: default_safe_weight,
        max_moves: default_max_moves,
    } = config.engine;

    match cli.command {
        Commands::Play {
            white,
            red,
            games,
            depth,
            iterations,
            exploitation,
            safe_weight,
            seed,
            max_moves,
            json,
        } => {
            let settings = AgentSettings {
                depth: depth.unwrap_or(default_depth),
                iterations: iterations.unwrap_or(default_iterations),
                exploitation: exploitation.unwrap_or(default_exploitation),
                safe_weight: safe_weight.unwrap_or(default_safe_weight),
                seed,
            };
            run_match(
                white,
                red,
                games,
                settings,
                max_moves.unwrap_or(default_max_moves),
                json,
            );
        }
        Commands::Sweep {
            population,
            games,
            depth,
            seed,
        } => {
            sweep::run(population, games, depth, seed, default_max_moves);
        }
    }
}
