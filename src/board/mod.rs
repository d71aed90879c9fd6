//! Board-side types read by the goals.
//!
//! Contains the colour palette, the flattened N×N grid and the `Flatten`
//! contract through which a hierarchical board exposes that grid.

pub mod color;
pub mod grid;

pub use color::{
    Color, ColorError, DAFFY_DUCK_YELLOW, OLD_OLIVE, PACIFIC_POINT, PALETTE, PALETTE_SIZE,
    REAL_RED,
};
pub use grid::{BoardError, FlatBoard, Flatten, MAX_SIZE};
