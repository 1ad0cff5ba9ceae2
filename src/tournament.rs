//! Round-robin evaluation of test agents against a fixed roster
//!
//! Each matchup is played as `matches` fair rounds. A fair round draws two
//! random opening moves, then plays that position twice with the seats
//! swapped so neither side profits from the opening.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::{Board, GameState};
use crate::config::EngineConfig;
use crate::engine::{AIEngine, Agent, RandomPlayer, SearchType};
use crate::error::Result;
use crate::eval::Heuristic;
use crate::game::{play_game, Outcome};

/// Results of one test agent against one opponent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matchup {
    pub opponent: String,
    pub wins: u32,
    pub losses: u32,
    /// Losses where the test agent ran out of time
    pub timeouts: u32,
    /// Losses where the test agent returned an illegal move
    pub forfeits: u32,
}

impl Matchup {
    #[inline]
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}

/// All matchups of one test agent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentReport {
    pub name: String,
    pub matchups: Vec<Matchup>,
}

impl AgentReport {
    /// Share of games won, in percent
    pub fn win_rate(&self) -> f64 {
        let (wins, games) = self
            .matchups
            .iter()
            .fold((0, 0), |(w, g), m| (w + m.wins, g + m.games()));
        if games == 0 {
            0.0
        } else {
            100.0 * f64::from(wins) / f64::from(games)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentReport {
    pub agents: Vec<AgentReport>,
}

impl fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.agents.first() else {
            return writeln!(f, "(no agents)");
        };
        write!(f, "{:<14}", "Opponent")?;
        for agent in &self.agents {
            write!(f, " {:>14}", agent.name)?;
        }
        writeln!(f)?;
        for (i, row) in first.matchups.iter().enumerate() {
            write!(f, "{:<14}", row.opponent)?;
            for agent in &self.agents {
                let m = &agent.matchups[i];
                write!(f, " {:>14}", format!("{} | {}", m.wins, m.losses))?;
            }
            writeln!(f)?;
        }
        write!(f, "{:<14}", "Win rate")?;
        for agent in &self.agents {
            write!(f, " {:>13.1}%", agent.win_rate())?;
        }
        writeln!(f)
    }
}

/// Baseline opponents: a random mover, then fixed-depth minimax and
/// iterative alpha-beta agents with the open, center and improved heuristics.
pub fn default_roster(config: &EngineConfig) -> Vec<Box<dyn Agent>> {
    let search = &config.search;
    let threshold = search.threshold();
    let mut roster: Vec<Box<dyn Agent>> = vec![Box::new(RandomPlayer::new(config.tournament.seed))];
    let baselines = [Heuristic::OpenMove, Heuristic::Center, Heuristic::Improved];
    for heuristic in baselines {
        roster.push(Box::new(AIEngine::with_config(
            SearchType::Minimax,
            search.depth,
            heuristic,
            threshold,
        )));
    }
    for heuristic in baselines {
        roster.push(Box::new(AIEngine::with_config(
            SearchType::AlphaBeta,
            search.depth,
            heuristic,
            threshold,
        )));
    }
    roster
}

/// Agents under test: the improved-heuristic reference and the three custom heuristics.
pub fn default_test_agents(config: &EngineConfig) -> Vec<Box<dyn Agent>> {
    let threshold = config.search.threshold();
    [Heuristic::Improved, Heuristic::Custom, Heuristic::Custom2, Heuristic::Custom3]
        .into_iter()
        .map(|h| {
            Box::new(AIEngine::with_config(
                SearchType::AlphaBeta,
                config.search.depth,
                h,
                threshold,
            )) as Box<dyn Agent>
        })
        .collect()
}

/// Play every test agent against every roster agent.
pub fn run_tournament(
    config: &EngineConfig,
    test_agents: &mut [Box<dyn Agent>],
    roster: &mut [Box<dyn Agent>],
) -> Result<TournamentReport> {
    let start = config.board.build()?;
    let mut rng = match config.tournament.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let time_limit = config.search.time_limit();

    let mut report = TournamentReport::default();
    for agent in test_agents.iter_mut() {
        log::info!("Evaluating {}", agent.name());
        let mut agent_report = AgentReport {
            name: agent.name().to_string(),
            matchups: Vec::with_capacity(roster.len()),
        };

        for opponent in roster.iter_mut() {
            let mut matchup = Matchup {
                opponent: opponent.name().to_string(),
                ..Matchup::default()
            };
            for _ in 0..config.tournament.matches {
                let opening = random_opening(&start, &mut rng);
                // Test agent first as Player One, then as Player Two
                for test_seat in 0..2 {
                    let seats: [&mut dyn Agent; 2] = if test_seat == 0 {
                        [agent.as_mut(), opponent.as_mut()]
                    } else {
                        [opponent.as_mut(), agent.as_mut()]
                    };
                    let record = play_game(opening.clone(), seats, time_limit);
                    if record.winner.index() == test_seat {
                        matchup.wins += 1;
                    } else {
                        matchup.losses += 1;
                        match record.outcome {
                            Outcome::Timeout => matchup.timeouts += 1,
                            Outcome::Forfeit => matchup.forfeits += 1,
                            Outcome::Isolated => {}
                        }
                    }
                }
            }
            log::info!(
                "{} vs {}: {} won, {} lost ({} timeouts, {} forfeits)",
                agent_report.name,
                matchup.opponent,
                matchup.wins,
                matchup.losses,
                matchup.timeouts,
                matchup.forfeits
            );
            agent_report.matchups.push(matchup);
        }

        log::info!("{} win rate: {:.1}%", agent_report.name, agent_report.win_rate());
        report.agents.push(agent_report);
    }
    Ok(report)
}

/// Two random plies from `start`: one placement per player
fn random_opening(start: &Board, rng: &mut StdRng) -> Board {
    let mut board = start.clone();
    for _ in 0..2 {
        let Some(&mv) = board.legal_moves().choose(rng) else {
            break;
        };
        board = board.apply_move(mv);
    }
    board
}
