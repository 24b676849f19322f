use rand::rngs::SmallRng;

use crate::battleship::board::Board;
use crate::battleship::common::{BoardError, Coord, ShotResult};

/// Interface implemented by the different player kinds.
///
/// Human players delegate to the console; the AI keeps its own
/// targeting state. The opponent board is passed in per call, read-only,
/// so players can render it or inspect shot history without owning it.
pub trait Player {
    /// Display name used by the turn loop.
    fn name(&self) -> &str;

    /// Place all ships onto the player's own board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next cell to shoot on the opponent's board.
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> Coord;

    /// Inform the player of the result of its own last shot.
    fn handle_shot_result(&mut self, _coord: Coord, _result: ShotResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _coord: Coord, _result: ShotResult) {}
}
