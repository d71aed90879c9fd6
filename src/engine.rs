//! Scorer state management.
//!
//! Holds the current board, the active goals and the runtime options, and
//! applies parsed commands to them. Goals are scored in parallel on a rayon
//! pool sized by the `Threads` option; the pool is built on first use and
//! kept until `Threads` changes.

use std::collections::HashMap;
use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::ThreadPool;
use serde::Serialize;

use crate::board::{Color, FlatBoard};
use crate::goal::{random_goals, score_all, Goal, GoalError, GoalKind, GoalSpec};
use crate::protocol::notation::{parse_grid, NotationError};
use crate::protocol::parser::Command;

/// Default worker count for parallel scoring.
const DEFAULT_THREADS: usize = 4;

/// Upper bound accepted for the `Threads` option.
pub const MAX_THREADS: usize = 64;

/// Response format for `score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One line of `score` output in JSON mode.
#[derive(Debug, Serialize)]
struct ScoreReport {
    kind: GoalKind,
    target: Color,
    score: u32,
}

/// Holds the mutable state of the scorer between commands.
pub struct Engine {
    pub position: Option<FlatBoard>,
    pub goals: Vec<GoalSpec>,
    pub options: HashMap<String, String>,
    pool: Option<ThreadPool>,
    rng: SmallRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a scorer with no board and no goals.
    pub fn new() -> Self {
        Engine {
            position: None,
            goals: Vec::new(),
            options: HashMap::new(),
            pool: None,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Applies one command, writing any response to `out`. Returns false
    /// once the session should end.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<bool> {
        match cmd {
            Command::IsReady => self.handle_isready(out)?,
            Command::SetOption { name, value } => self.set_option(name, value),
            Command::Position { grid } => {
                if let Err(e) = self.set_position(&grid) {
                    eprintln!("position: {}", e);
                }
            }
            Command::Goal { kind, target } => self.add_goal(kind, target),
            Command::RandomGoals { count, seed } => {
                if let Err(e) = self.deal_goals(count, seed) {
                    eprintln!("randomgoals: {}", e);
                }
            }
            Command::ClearGoals => self.clear_goals(),
            Command::Score => self.handle_score(out)?,
            Command::Describe => self.handle_describe(out)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Sets the current board from grid notation. The previous board is kept
    /// if parsing fails.
    pub fn set_position(&mut self, grid: &str) -> Result<(), NotationError> {
        self.position = Some(parse_grid(grid)?);
        Ok(())
    }

    /// Sets an option. Changing `Threads` discards the current pool.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        if name == "Threads" {
            self.pool = None;
        }
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Adds a goal to the active list.
    pub fn add_goal(&mut self, kind: GoalKind, target: Color) {
        self.goals.push(GoalSpec { kind, target });
    }

    /// Removes every goal.
    pub fn clear_goals(&mut self) {
        self.goals.clear();
    }

    /// Replaces the active goals with `count` generated ones. With a seed the
    /// result is reproducible; without one the scorer's own generator is used.
    pub fn deal_goals(&mut self, count: usize, seed: Option<u64>) -> Result<(), GoalError> {
        let goals = match seed {
            Some(s) => random_goals(count, &mut SmallRng::seed_from_u64(s))?,
            None => random_goals(count, &mut self.rng)?,
        };
        self.goals = goals;
        Ok(())
    }

    /// Returns the configured output format (default text).
    pub fn output_format(&self) -> OutputFormat {
        match self.options.get("Output").map(|v| v.to_ascii_lowercase()) {
            Some(v) if v == "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    /// Returns the configured worker count (default 4, within 1..=64).
    pub fn threads(&self) -> usize {
        self.options
            .get("Threads")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_THREADS)
            .clamp(1, MAX_THREADS)
    }

    /// Builds the scoring pool if there is none yet. On failure scoring
    /// falls back to rayon's global pool.
    fn ensure_pool(&mut self) {
        if self.pool.is_some() {
            return;
        }
        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads())
            .build()
        {
            Ok(pool) => self.pool = Some(pool),
            Err(e) => eprintln!("score: falling back to global pool: {}", e),
        }
    }

    /// Scores every active goal against the current board, in goal order.
    /// Returns None when no board is set.
    pub fn scores(&mut self) -> Option<Vec<u32>> {
        self.position.as_ref()?;
        self.ensure_pool();

        let board = self.position.as_ref()?;
        let goals: Vec<Box<dyn Goal>> = self.goals.iter().map(|spec| spec.build()).collect();
        Some(match &self.pool {
            Some(pool) => pool.install(|| score_all(&goals, board)),
            None => score_all(&goals, board),
        })
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `score` command: one line per goal, then `scoreok`.
    pub fn handle_score<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let scores = match self.scores() {
            Some(s) => s,
            None => {
                eprintln!("score: no position set");
                return Ok(());
            }
        };
        if self.goals.is_empty() {
            eprintln!("score: no goals set");
        }

        let format = self.output_format();
        for (spec, score) in self.goals.iter().zip(scores) {
            match format {
                OutputFormat::Text => writeln!(out, "score {} {} {}", spec.kind, spec.target, score)?,
                OutputFormat::Json => {
                    let report = ScoreReport {
                        kind: spec.kind,
                        target: spec.target,
                        score,
                    };
                    serde_json::to_writer(&mut *out, &report)?;
                    writeln!(out)?;
                }
            }
        }
        writeln!(out, "scoreok")?;
        out.flush()
    }

    /// Handles the `describe` command.
    pub fn handle_describe<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for spec in &self.goals {
            writeln!(out, "description {} {}", spec.kind, spec.build().description())?;
        }
        out.flush()
    }
}
