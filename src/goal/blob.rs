//! Largest-blob goal.
//!
//! Scores the size of the largest 4-connected group of unit cells of the
//! target colour. The flood fill runs on an explicit stack so that a board
//! filled with one colour (blob size N²) cannot exhaust the call stack.

use crate::board::{Color, FlatBoard, Flatten};

use super::Goal;

const DESCRIPTION: &str = "Create a large group of connected blocks to win!";

/// Per-cell state of one scoring pass. A cell never returns to `Unvisited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    VisitedNonMatching,
    VisitedMatching,
}

/// Goal: build the largest connected blob of the target colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobGoal {
    target: Color,
}

impl BlobGoal {
    pub fn new(target: Color) -> Self {
        BlobGoal { target }
    }

    /// Size of the blob of matching, still-unvisited cells containing
    /// `(row, col)`. Every cell touched is marked, matching or not, so a cell
    /// is counted at most once per scoring pass.
    fn undiscovered_blob_size(
        &self,
        board: &FlatBoard,
        visited: &mut [VisitState],
        stack: &mut Vec<(usize, usize)>,
        row: usize,
        col: usize,
    ) -> u32 {
        let n = board.size();
        let mut size = 0;

        stack.clear();
        stack.push((row, col));

        while let Some((r, c)) = stack.pop() {
            let idx = r * n + c;
            if visited[idx] != VisitState::Unvisited {
                continue;
            }
            if board[(r, c)] != self.target {
                visited[idx] = VisitState::VisitedNonMatching;
                continue;
            }
            visited[idx] = VisitState::VisitedMatching;
            size += 1;

            // Up, down, left, right; off-board neighbours are skipped.
            if r > 0 {
                stack.push((r - 1, c));
            }
            if r + 1 < n {
                stack.push((r + 1, c));
            }
            if c > 0 {
                stack.push((r, c - 1));
            }
            if c + 1 < n {
                stack.push((r, c + 1));
            }
        }

        size
    }
}

impl Goal for BlobGoal {
    fn target(&self) -> Color {
        self.target
    }

    fn score(&self, board: &dyn Flatten) -> u32 {
        let board = board.flatten();
        let n = board.size();

        let mut visited = vec![VisitState::Unvisited; n * n];
        let mut stack = Vec::new();
        let mut best = 0;

        for row in 0..n {
            for col in 0..n {
                if visited[row * n + col] != VisitState::Unvisited {
                    continue;
                }
                let size = self.undiscovered_blob_size(&board, &mut visited, &mut stack, row, col);
                best = best.max(size);
            }
        }

        best
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{DAFFY_DUCK_YELLOW as Y, OLD_OLIVE as O, PACIFIC_POINT as B, REAL_RED as R};

    fn board(rows: &[&[Color]]) -> FlatBoard {
        FlatBoard::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn absent_color_scores_zero() {
        let b = board(&[&[B, Y], &[Y, B]]);
        assert_eq!(BlobGoal::new(R).score(&b), 0);
    }

    #[test]
    fn full_board_is_one_blob() {
        for n in [1, 2, 4, 8, 16] {
            let b = FlatBoard::filled(n, O).unwrap();
            assert_eq!(BlobGoal::new(O).score(&b), (n * n) as u32);
        }
    }

    #[test]
    fn single_interior_hole() {
        let b = FlatBoard::filled(4, B).unwrap().with_cell(1, 1, R);
        assert_eq!(BlobGoal::new(B).score(&b), 15);
        assert_eq!(BlobGoal::new(R).score(&b), 1);
    }

    #[test]
    fn diagonal_cells_are_not_connected() {
        let b = board(&[&[Y, B], &[B, Y]]);
        assert_eq!(BlobGoal::new(Y).score(&b), 1);
        assert_eq!(BlobGoal::new(B).score(&b), 1);
    }

    #[test]
    fn largest_of_several_blobs() {
        let b = board(&[
            &[R, R, B, Y],
            &[B, B, B, Y],
            &[R, B, Y, Y],
            &[R, R, Y, R],
        ]);
        assert_eq!(BlobGoal::new(R).score(&b), 3);
        assert_eq!(BlobGoal::new(B).score(&b), 5);
        assert_eq!(BlobGoal::new(Y).score(&b), 5);
    }

    #[test]
    fn blob_found_from_non_matching_start() {
        // The first cell in row-major order does not match; the blob is only
        // reached later in the scan and must still be measured in full.
        let b = board(&[&[B, B], &[R, R]]);
        assert_eq!(BlobGoal::new(R).score(&b), 2);
    }

    #[test]
    fn snake_shaped_blob() {
        let b = board(&[
            &[Y, Y, Y, Y],
            &[B, B, B, Y],
            &[Y, Y, Y, Y],
            &[Y, B, B, B],
        ]);
        assert_eq!(BlobGoal::new(Y).score(&b), 10);
    }

    #[test]
    fn large_uniform_board_does_not_overflow_stack() {
        let b = FlatBoard::filled(512, R).unwrap();
        assert_eq!(BlobGoal::new(R).score(&b), 512 * 512);
    }

    #[test]
    fn score_is_idempotent() {
        let b = board(&[&[R, R], &[B, R]]);
        let goal = BlobGoal::new(R);
        assert_eq!(goal.score(&b), 3);
        assert_eq!(goal.score(&b), 3);
    }

    #[test]
    fn description_is_fixed() {
        assert_eq!(BlobGoal::new(R).description(), DESCRIPTION);
        assert_eq!(BlobGoal::new(B).description(), BlobGoal::new(R).description());
    }
}
