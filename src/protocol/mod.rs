//! Text protocol handling.
//!
//! Grid notation for flattened boards and the line-oriented command parser
//! used by the scorer binary.

pub mod notation;
pub mod parser;

pub use notation::{encode_grid, parse_grid, NotationError};
pub use parser::{parse_command, Command};
