//! Match-3 tile puzzle: grid state, cascade resolution and scoring.

mod config;
mod engine;
mod grid;
mod input;
mod score;

pub use config::*;
pub use engine::*;
pub use grid::*;
pub use input::*;
pub use score::*;
