//! Player goals.
//!
//! A goal holds one target colour and scores a flattened board against it.
//! Scoring is pure: the board is only read, and every call allocates its own
//! working state, so one goal may be scored from many threads at once.

pub mod blob;
pub mod perimeter;

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Color, Flatten, PALETTE, PALETTE_SIZE};

pub use blob::BlobGoal;
pub use perimeter::PerimeterGoal;

/// Errors from goal parsing and generation.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("unknown goal kind: '{0}'")]
    UnknownKind(String),

    #[error("cannot assign {requested} distinct colours from a palette of {available}")]
    TooManyGoals { requested: usize, available: usize },

    #[error("invalid goal list: {0}")]
    InvalidSpec(#[from] serde_json::Error),
}

/// Shared contract of all goals.
pub trait Goal: Send + Sync {
    /// The colour this goal scores against.
    fn target(&self) -> Color;

    /// Current score on `board`. Never mutates the board.
    fn score(&self, board: &dyn Flatten) -> u32;

    /// A fixed, human-readable statement of the objective.
    fn description(&self) -> &'static str;
}

/// The goal variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Blob,
    Perimeter,
}

pub const ALL_GOAL_KINDS: [GoalKind; 2] = [GoalKind::Blob, GoalKind::Perimeter];

impl GoalKind {
    pub const fn name(self) -> &'static str {
        match self {
            GoalKind::Blob => "blob",
            GoalKind::Perimeter => "perimeter",
        }
    }

    /// Constructs a goal of this kind for `target`.
    pub fn build(self, target: Color) -> Box<dyn Goal> {
        match self {
            GoalKind::Blob => Box::new(BlobGoal::new(target)),
            GoalKind::Perimeter => Box::new(PerimeterGoal::new(target)),
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GoalKind {
    type Err = GoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_GOAL_KINDS
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GoalError::UnknownKind(s.to_string()))
    }
}

/// A serializable goal description: `{"kind": "blob", "target": [r, g, b]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSpec {
    pub kind: GoalKind,
    pub target: Color,
}

impl GoalSpec {
    pub fn build(self) -> Box<dyn Goal> {
        self.kind.build(self.target)
    }
}

/// Parses a JSON array of goal specs.
pub fn load_goal_specs(json: &str) -> Result<Vec<GoalSpec>, GoalError> {
    Ok(serde_json::from_str(json)?)
}

/// Generates `count` goals of one randomly chosen kind, each with its own
/// palette colour.
pub fn random_goals<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<GoalSpec>, GoalError> {
    if count > PALETTE_SIZE {
        return Err(GoalError::TooManyGoals {
            requested: count,
            available: PALETTE_SIZE,
        });
    }

    let kind = if rng.gen_bool(0.5) {
        GoalKind::Blob
    } else {
        GoalKind::Perimeter
    };

    let mut colors = PALETTE;
    colors.shuffle(rng);

    Ok(colors
        .into_iter()
        .take(count)
        .map(|target| GoalSpec { kind, target })
        .collect())
}

/// Scores every goal against one board in parallel. The board is flattened
/// once; results are in the order of `goals`.
pub fn score_all(goals: &[Box<dyn Goal>], board: &dyn Flatten) -> Vec<u32> {
    let flat = board.flatten();
    let flat = &*flat;
    goals.par_iter().map(|goal| goal.score(flat)).collect()
}
