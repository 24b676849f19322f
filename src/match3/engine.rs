//! Cascade engine: match detection, removal, gravity and swap handling.

use log::debug;
use rand::Rng;

use crate::match3::config::{GridConfig, ScoreConfig};
use crate::match3::grid::{MatchMask, TileGrid};
use crate::match3::score::ScoreBoard;

/// Lifecycle of a match-3 session. Frontends should ignore input unless
/// the state is `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    Initializing,
    Playing,
    Processing,
    GameOver,
}

/// Synchronous match-3 core.
///
/// All cascade resolution runs to completion inside the call that
/// triggered it; callers wanting to animate intermediate grids can step
/// with [`MatchEngine::advance_cascade_step`] instead.
pub struct MatchEngine {
    config: GridConfig,
    grid: TileGrid,
    score: ScoreBoard,
    state: GameState,
    moves_left: Option<u32>,
}

impl MatchEngine {
    pub fn new(config: GridConfig) -> Self {
        Self::with_scoring(config, ScoreConfig::default())
    }

    pub fn with_scoring(config: GridConfig, scoring: ScoreConfig) -> Self {
        let grid = TileGrid::new(config.size);
        let moves_left = config.max_moves;
        MatchEngine {
            config,
            grid,
            score: ScoreBoard::new(scoring),
            state: GameState::Initializing,
            moves_left,
        }
    }

    /// Build an engine around an existing grid, already in play. For
    /// fixtures and tests.
    pub fn from_grid(grid: TileGrid, config: GridConfig) -> Self {
        assert_eq!(grid.size(), config.size, "grid and config sizes differ");
        let moves_left = config.max_moves;
        MatchEngine {
            config,
            grid,
            score: ScoreBoard::new(ScoreConfig::default()),
            state: GameState::Playing,
            moves_left,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Running score total.
    pub fn score(&self) -> u64 {
        self.score.total()
    }

    pub fn moves_left(&self) -> Option<u32> {
        self.moves_left
    }

    /// Fill the empty board and settle all initial cascades without
    /// scoring, then open play.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let removed = self.run_cascades(rng);
        debug!("initial settle removed {} tiles", removed);
        self.state = GameState::Playing;
    }

    /// Scan every row and column for runs of three or more identical
    /// colors. All cells of a qualifying run are marked, so runs longer
    /// than three and crossing runs merge into one mask.
    pub fn check_matches(&self) -> MatchMask {
        let n = self.config.size;
        let mut mask = MatchMask::new(n);
        for row in 0..n {
            for col in 0..n.saturating_sub(2) {
                if let Some(tile) = self.grid.color(row, col) {
                    if self.grid.color(row, col + 1) == Some(tile)
                        && self.grid.color(row, col + 2) == Some(tile)
                    {
                        mask.mark(row, col);
                        mask.mark(row, col + 1);
                        mask.mark(row, col + 2);
                    }
                }
            }
        }
        for row in 0..n.saturating_sub(2) {
            for col in 0..n {
                if let Some(tile) = self.grid.color(row, col) {
                    if self.grid.color(row + 1, col) == Some(tile)
                        && self.grid.color(row + 2, col) == Some(tile)
                    {
                        mask.mark(row, col);
                        mask.mark(row + 1, col);
                        mask.mark(row + 2, col);
                    }
                }
            }
        }
        mask
    }

    /// Empty every masked cell. Returns the number of tiles removed.
    pub fn remove_matched(&mut self, mask: &MatchMask) -> usize {
        let n = self.config.size;
        let mut removed = 0;
        for row in 0..n {
            for col in 0..n {
                if mask.is_marked(row, col) && self.grid.color(row, col).is_some() {
                    self.grid.set(row, col, None);
                    removed += 1;
                }
            }
        }
        removed
    }

    /// One cascade pass: refill empties, then check, remove and drop.
    /// Returns `None` once a check finds nothing, so callers can animate
    /// between steps. Filling at the top of the pass means the loop
    /// always converges to a full, matchless grid, whatever it started
    /// from.
    pub fn advance_cascade_step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        self.grid.fill_empty(rng, self.config.colors);
        let mask = self.check_matches();
        if !mask.any() {
            return None;
        }
        let removed = self.remove_matched(&mask);
        self.grid.drop_tiles();
        Some(removed)
    }

    fn run_cascades<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut total = 0;
        while let Some(removed) = self.advance_cascade_step(rng) {
            total += removed;
        }
        total
    }

    /// Resolve all pending cascades synchronously and return the total
    /// removed. Terminates because every pass removes at least three
    /// tiles or ends the loop.
    pub fn process_matches<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        self.state = GameState::Processing;
        let total = self.run_cascades(rng);
        self.state = GameState::Playing;
        total
    }

    /// Whether `a` and `b` share an edge (Manhattan distance exactly 1).
    pub fn are_adjacent(a: (usize, usize), b: (usize, usize)) -> bool {
        a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1
    }

    /// Attempt to swap two tiles.
    ///
    /// Non-adjacent or out-of-range pairs are silently rejected, as is
    /// any swap while the engine is not `Playing`. A swap producing no
    /// match is reverted and reports zero removed. Otherwise the swap
    /// consumes a move, every cascade resolves, the total is scored once
    /// and returned.
    pub fn handle_tile_swap<R: Rng + ?Sized>(
        &mut self,
        a: (usize, usize),
        b: (usize, usize),
        rng: &mut R,
    ) -> usize {
        if self.state != GameState::Playing {
            return 0;
        }
        if !self.grid.in_bounds(a.0, a.1) || !self.grid.in_bounds(b.0, b.1) {
            return 0;
        }
        if !Self::are_adjacent(a, b) {
            return 0;
        }
        self.grid.swap(a, b);
        let mask = self.check_matches();
        if !mask.any() {
            self.grid.swap(a, b);
            return 0;
        }

        self.state = GameState::Processing;
        let mut total = self.remove_matched(&mask);
        self.grid.drop_tiles();
        total += self.run_cascades(rng);
        let points = self.score.add_for_tiles(total as u32);
        debug!(
            "swap {:?}<->{:?} removed {} tiles for {} points",
            a, b, total, points
        );

        if let Some(left) = self.moves_left.as_mut() {
            *left = left.saturating_sub(1);
            if *left == 0 {
                self.state = GameState::GameOver;
                return total;
            }
        }
        self.state = GameState::Playing;
        total
    }
}
