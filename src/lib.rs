//! Blocky goal-scoring library.
//!
//! Exposes the flattened board, the goal implementations, and the text
//! protocol used by the scorer binary and the integration tests.

pub mod board;
pub mod engine;
pub mod goal;
pub mod protocol;
