//! Turn-based battleship: board state, shot resolution and players.

mod board;
mod common;
mod config;
mod game;
mod player;
mod player_ai;
mod player_cli;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ship::*;
