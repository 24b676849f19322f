//! Two self-contained board-game engines: classic battleship and a
//! match-3 tile puzzle.
//!
//! Both cores are synchronous, single-threaded state machines over a
//! square grid. Every randomized choice (ship auto-placement, AI move
//! order, tile refill) draws from a caller-supplied RNG, so whole games
//! replay exactly from a seed.

pub mod battleship;
mod logging;
pub mod match3;

pub use logging::init_logging;
