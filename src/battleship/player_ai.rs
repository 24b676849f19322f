//! AI player: pre-shuffled search order plus frontier expansion around
//! hits.

use log::trace;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::battleship::board::Board;
use crate::battleship::common::{BoardError, Coord, ShotResult};
use crate::battleship::player::Player;

/// Current targeting mode: random search until something is hit, then
/// work the frontier queue until the ship goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingMode {
    Searching,
    Targeting,
}

/// Computer opponent.
///
/// Holds a pre-shuffled permutation of every board cell, consumed from
/// the back, so a whole game never repeats a coordinate. Hits push the
/// orthogonal neighbors onto a last-in-first-out target queue that
/// drains before random search resumes.
pub struct AiPlayer {
    name: String,
    board_size: usize,
    pool: Vec<Coord>,
    targets: Vec<Coord>,
    mode: TargetingMode,
}

impl AiPlayer {
    /// Build the AI, shuffling its move order once up front.
    pub fn new(name: impl Into<String>, board_size: usize, rng: &mut SmallRng) -> Self {
        let mut pool = Vec::with_capacity(board_size * board_size);
        for row in 0..board_size {
            for col in 0..board_size {
                pool.push((row, col));
            }
        }
        pool.shuffle(rng);
        AiPlayer {
            name: name.into(),
            board_size,
            pool,
            targets: Vec::new(),
            mode: TargetingMode::Searching,
        }
    }

    pub fn mode(&self) -> TargetingMode {
        self.mode
    }

    /// Frontier cells queued for follow-up shots, oldest first.
    pub fn queued_targets(&self) -> &[Coord] {
        &self.targets
    }

    /// Unshot cells remaining in the random search pool.
    pub fn remaining_pool(&self) -> &[Coord] {
        &self.pool
    }

    fn queue_neighbors(&mut self, (row, col): Coord) {
        let deltas = [(0i64, 1i64), (1, 0), (0, -1), (-1, 0)];
        for (dr, dc) in deltas {
            let r = row as i64 + dr;
            let c = col as i64 + dc;
            if r < 0 || c < 0 || r >= self.board_size as i64 || c >= self.board_size as i64 {
                continue;
            }
            let coord = (r as usize, c as usize);
            // only cells still in the unshot pool qualify; pulling them
            // out of the pool also keeps the queue duplicate-free
            if let Some(idx) = self.pool.iter().position(|&m| m == coord) {
                self.pool.remove(idx);
                self.targets.push(coord);
            }
        }
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        board.place_fleet(rng)
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _opponent: &Board) -> Coord {
        if let Some(coord) = self.targets.pop() {
            trace!("{} fires at queued target {:?}", self.name, coord);
            return coord;
        }
        self.mode = TargetingMode::Searching;
        self.pool.pop().unwrap_or((0, 0))
    }

    fn handle_shot_result(&mut self, coord: Coord, result: ShotResult) {
        match result {
            ShotResult::Hit => {
                self.queue_neighbors(coord);
                self.mode = TargetingMode::Targeting;
            }
            ShotResult::Sunk => {
                self.targets.clear();
                self.mode = TargetingMode::Searching;
            }
            ShotResult::Miss | ShotResult::AlreadyShot => {
                if self.targets.is_empty() {
                    self.mode = TargetingMode::Searching;
                }
            }
        }
    }
}
