/// Tunables for the tile grid. Explicit so tests can shrink the board
/// or palette at will.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Side length of the square grid. Below three nothing can match.
    pub size: usize,
    /// Palette size; tiles carry color indices in `0..colors`. Must be
    /// at least one.
    pub colors: u8,
    /// Swap budget before the game ends, `None` for endless play.
    pub max_moves: Option<u32>,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            size: 16,
            colors: 6,
            max_moves: Some(50),
        }
    }
}

/// Scoring tunables: flat per-tile value plus tiered combo multipliers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreConfig {
    /// Base points per removed tile.
    pub per_tile: u32,
    /// `(threshold, multiplier)` pairs; the highest threshold reached by
    /// a removal burst wins and the bonus is `removed * multiplier`.
    pub bonus_tiers: Vec<(u32, u32)>,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        ScoreConfig {
            per_tile: 10,
            bonus_tiers: vec![(15, 5), (10, 3), (5, 2)],
        }
    }
}
