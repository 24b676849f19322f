//! Board state: placement validation, shot resolution and the
//! visibility rules for rendering either side of the table.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::battleship::common::{BoardError, Coord, ShotResult};
use crate::battleship::config::BoardConfig;
use crate::battleship::ship::{Orientation, Ship};

/// What one cell looks like in a rendered snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellMark {
    Unknown,
    Ship,
    Hit,
    Miss,
}

impl CellMark {
    /// Single-character console legend: `.`, `S`, `X`, `O`.
    pub fn symbol(self) -> char {
        match self {
            CellMark::Unknown => '.',
            CellMark::Ship => 'S',
            CellMark::Hit => 'X',
            CellMark::Miss => 'O',
        }
    }
}

/// One player's grid: the placed ships plus the full shot history.
///
/// Shots accumulate monotonically for the whole game; ships are added
/// during setup only.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    config: BoardConfig,
    ships: Vec<Ship>,
    shots: HashSet<Coord>,
    misses: Vec<Coord>,
}

impl Board {
    /// Create an empty board for `config`.
    pub fn new(config: BoardConfig) -> Self {
        Board {
            config,
            ships: Vec::new(),
            shots: HashSet::new(),
            misses: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Cells missed so far, in shot order.
    pub fn misses(&self) -> &[Coord] {
        &self.misses
    }

    pub fn shot_count(&self) -> usize {
        self.shots.len()
    }

    pub fn was_shot(&self, coord: Coord) -> bool {
        self.shots.contains(&coord)
    }

    fn in_bounds(&self, (row, col): Coord) -> bool {
        row < self.config.size && col < self.config.size
    }

    fn validate_placement(&self, ship: &Ship) -> Result<(), BoardError> {
        for cell in ship.cells() {
            if !self.in_bounds(cell) {
                return Err(BoardError::ShipOutOfBounds);
            }
        }
        // ships may not touch, diagonals included: every pair of cells
        // from different ships must be at Chebyshev distance >= 2
        for placed in &self.ships {
            for (pr, pc) in placed.cells() {
                for (nr, nc) in ship.cells() {
                    if pr.abs_diff(nr) <= 1 && pc.abs_diff(nc) <= 1 {
                        return Err(BoardError::ShipsTooClose);
                    }
                }
            }
        }
        Ok(())
    }

    /// Check `ship` against the bounds and no-touching rules without
    /// mutating the board.
    pub fn can_place(&self, ship: &Ship) -> bool {
        self.validate_placement(ship).is_ok()
    }

    /// Place `ship` on the board. Rejections leave the board untouched.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        self.validate_placement(&ship)?;
        debug!(
            "placed ship len={} at {:?} {:?}",
            ship.length(),
            ship.origin(),
            ship.orientation()
        );
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot at `coord`. Re-shooting a cell is the
    /// [`ShotResult::AlreadyShot`] outcome and mutates nothing.
    pub fn receive_shot(&mut self, coord: Coord) -> Result<ShotResult, BoardError> {
        if !self.in_bounds(coord) {
            return Err(BoardError::OutOfBounds {
                row: coord.0,
                col: coord.1,
            });
        }
        if self.shots.contains(&coord) {
            return Ok(ShotResult::AlreadyShot);
        }
        self.shots.insert(coord);
        for ship in &mut self.ships {
            if ship.register_hit(coord) {
                let result = if ship.is_sunk() {
                    ShotResult::Sunk
                } else {
                    ShotResult::Hit
                };
                debug!("shot {:?} -> {:?}", coord, result);
                return Ok(result);
            }
        }
        self.misses.push(coord);
        debug!("shot {:?} -> miss", coord);
        Ok(ShotResult::Miss)
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Total number of ship cells on the board.
    pub fn ship_cell_count(&self) -> usize {
        self.ships.iter().map(Ship::length).sum()
    }

    /// Snapshot for rendering. Misses and hits are always visible;
    /// intact ship cells only when `for_owner` is true, so the same call
    /// serves both sides of the table without leaking ship positions.
    pub fn visible_state(&self, for_owner: bool) -> Vec<Vec<CellMark>> {
        let n = self.config.size;
        let mut state = vec![vec![CellMark::Unknown; n]; n];
        for &(r, c) in &self.misses {
            state[r][c] = CellMark::Miss;
        }
        for ship in &self.ships {
            for (r, c) in ship.cells() {
                if self.shots.contains(&(r, c)) {
                    state[r][c] = CellMark::Hit;
                } else if for_owner {
                    state[r][c] = CellMark::Ship;
                }
            }
        }
        state
    }

    /// Find a valid position for a ship of `length`: a bounded number of
    /// random tries first, then an exhaustive scan over every
    /// orientation, row and column, so placement succeeds whenever any
    /// valid position exists.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Ship, BoardError> {
        let n = self.config.size;
        for _ in 0..self.config.placement_attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..n);
            let col = rng.random_range(0..n);
            let ship = Ship::new(length, (row, col), orientation);
            if self.can_place(&ship) {
                return Ok(ship);
            }
        }
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for row in 0..n {
                for col in 0..n {
                    let ship = Ship::new(length, (row, col), orientation);
                    if self.can_place(&ship) {
                        return Ok(ship);
                    }
                }
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Auto-place the whole configured fleet.
    pub fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let lengths = self.config.ship_lengths.clone();
        for length in lengths {
            let ship = self.random_placement(rng, length)?;
            self.place_ship(ship)?;
        }
        Ok(())
    }
}
