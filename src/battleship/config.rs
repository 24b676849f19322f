/// Expand `(length, count)` pairs into a flat list of ship lengths.
pub fn fleet_from_counts(counts: &[(usize, usize)]) -> Vec<usize> {
    let mut lengths = Vec::new();
    for &(length, count) in counts {
        for _ in 0..count {
            lengths.push(length);
        }
    }
    lengths
}

/// Everything a board needs to know up front. Passed explicitly into
/// constructors so tests can vary board size, fleet and placement tuning
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Side length of the square board.
    pub size: usize,
    /// Lengths of the ships to place, longest first.
    pub ship_lengths: Vec<usize>,
    /// Random placement attempts before the exhaustive fallback scan.
    pub placement_attempts: usize,
}

impl Default for BoardConfig {
    /// Classic 10x10 rules: one ship of four, two of three, three of
    /// two, four singles.
    fn default() -> Self {
        BoardConfig {
            size: 10,
            ship_lengths: fleet_from_counts(&[(4, 1), (3, 2), (2, 3), (1, 4)]),
            placement_attempts: 100,
        }
    }
}
