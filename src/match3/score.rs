//! Running score with tiered combo bonuses.

use crate::match3::config::ScoreConfig;

/// Monotonically non-decreasing score total.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBoard {
    config: ScoreConfig,
    total: u64,
}

impl ScoreBoard {
    pub fn new(config: ScoreConfig) -> Self {
        ScoreBoard { config, total: 0 }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    fn bonus_for(&self, tiles_removed: u32) -> u64 {
        let mut best_threshold = None;
        for &(threshold, multiplier) in &self.config.bonus_tiers {
            if tiles_removed >= threshold {
                match best_threshold {
                    Some((best, _)) if best >= threshold => {}
                    _ => best_threshold = Some((threshold, multiplier)),
                }
            }
        }
        match best_threshold {
            Some((_, multiplier)) => tiles_removed as u64 * multiplier as u64,
            None => 0,
        }
    }

    /// Points for a single removal burst: per-tile base plus the highest
    /// bonus tier reached. Pure; does not touch the total.
    pub fn points_for(&self, tiles_removed: u32) -> u64 {
        if tiles_removed == 0 {
            return 0;
        }
        tiles_removed as u64 * self.config.per_tile as u64 + self.bonus_for(tiles_removed)
    }

    /// Score a removal burst and return the points added.
    pub fn add_for_tiles(&mut self, tiles_removed: u32) -> u64 {
        let points = self.points_for(tiles_removed);
        self.total += points;
        points
    }
}
