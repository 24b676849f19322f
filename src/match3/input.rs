//! Tile selection tracking for click-driven frontends.

use crate::match3::engine::GameState;

/// What a click did to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileClickResult {
    /// Click ignored (engine busy or game over).
    Ignored,
    /// First tile of a pair selected.
    FirstSelected,
    /// Second tile selected; the pair is ready to swap.
    SwapReady,
    /// Click on the already-selected tile cleared the selection.
    Deselected,
}

/// Tracks the two-click swap selection.
///
/// The frontend feeds in clicks and calls the engine's swap once
/// `SwapReady` comes back, then resets.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    first: Option<(usize, usize)>,
    second: Option<(usize, usize)>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_click(&mut self, coord: (usize, usize), state: GameState) -> TileClickResult {
        if state != GameState::Playing {
            return TileClickResult::Ignored;
        }
        match self.first {
            None => {
                self.first = Some(coord);
                TileClickResult::FirstSelected
            }
            Some(first) if first == coord => {
                self.reset();
                TileClickResult::Deselected
            }
            Some(_) => {
                self.second = Some(coord);
                TileClickResult::SwapReady
            }
        }
    }

    /// The selected pair, available once `SwapReady` was returned.
    pub fn pair(&self) -> Option<((usize, usize), (usize, usize))> {
        match (self.first, self.second) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.first = None;
        self.second = None;
    }
}
