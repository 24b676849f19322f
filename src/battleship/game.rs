//! Turn loop driving two players against each other's boards.

use log::info;
use rand::rngs::SmallRng;

use crate::battleship::board::Board;
use crate::battleship::common::{BoardError, ShotResult};
use crate::battleship::config::BoardConfig;
use crate::battleship::player::Player;

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOutcome {
    /// Index of the winning player (0 or 1).
    pub winner: usize,
    /// Shots fired per player, repeats included.
    pub shots: [usize; 2],
}

/// A match between two players, each owning one board.
///
/// The orchestrator owns both boards and hands each player a read-only
/// view of the opponent's board per turn; shots are dispatched here so
/// no player ever holds a mutable handle to the other side.
pub struct Game {
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
}

impl Game {
    pub fn new(config: BoardConfig, players: [Box<dyn Player>; 2]) -> Self {
        let boards = [Board::new(config.clone()), Board::new(config)];
        Game { players, boards }
    }

    pub fn board(&self, index: usize) -> &Board {
        &self.boards[index]
    }

    pub fn player_name(&self, index: usize) -> &str {
        self.players[index].name()
    }

    /// Place both fleets. Each player arranges its own board.
    pub fn setup(&mut self, rng: &mut SmallRng) -> Result<(), BoardError> {
        for (player, board) in self.players.iter_mut().zip(self.boards.iter_mut()) {
            info!("{} places ships", player.name());
            player.place_ships(rng, board)?;
        }
        Ok(())
    }

    /// Run turns to completion. A hit or a sink earns another shot; a
    /// miss or a repeated cell passes the turn.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<GameOutcome, BoardError> {
        let mut current = 0usize;
        let mut shots = [0usize; 2];
        loop {
            let opponent = 1 - current;
            let coord = {
                let opponent_board = &self.boards[opponent];
                self.players[current].select_target(rng, opponent_board)
            };
            let result = self.boards[opponent].receive_shot(coord)?;
            shots[current] += 1;
            self.players[current].handle_shot_result(coord, result);
            self.players[opponent].handle_opponent_shot(coord, result);

            if self.boards[opponent].all_sunk() {
                info!("{} wins", self.players[current].name());
                return Ok(GameOutcome {
                    winner: current,
                    shots,
                });
            }
            if !matches!(result, ShotResult::Hit | ShotResult::Sunk) {
                current = opponent;
            }
        }
    }
}
