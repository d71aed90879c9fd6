//! Perimeter goal.
//!
//! One point per target-coloured unit cell on the outer border. The scan
//! checks both ends of every row, then the full first and last rows; the
//! corners fall in both passes and so count double. On a 1×1 board the single
//! cell is hit by all four checks.

use crate::board::{Color, Flatten};

use super::Goal;

const DESCRIPTION: &str = "Have as many unit cells as possible on the outer perimeter!";

/// Goal: cover as much of the outer border as possible with the target colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerimeterGoal {
    target: Color,
}

impl PerimeterGoal {
    pub fn new(target: Color) -> Self {
        PerimeterGoal { target }
    }

    #[inline]
    fn hit(&self, color: Color) -> u32 {
        (color == self.target) as u32
    }
}

impl Goal for PerimeterGoal {
    fn target(&self) -> Color {
        self.target
    }

    fn score(&self, board: &dyn Flatten) -> u32 {
        let board = board.flatten();
        let last = board.size() - 1;

        let mut score = 0;
        for row in board.rows() {
            score += self.hit(row[0]);
            score += self.hit(row[last]);
        }
        for &color in board.row(0).iter().chain(board.row(last)) {
            score += self.hit(color);
        }
        score
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }
}
