//! Tile grid storage: flat row-major cells with gravity and refill.

use rand::Rng;

/// One palette color, an index below the configured palette size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile(pub u8);

/// A grid cell: a colored tile or empty space.
pub type Cell = Option<Tile>;

/// Square tile grid stored as a flat row-major array. Row 0 is the top;
/// gravity pulls tiles toward the highest row index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl TileGrid {
    /// Create an all-empty grid.
    pub fn new(size: usize) -> Self {
        TileGrid {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from rows, for fixtures and tests. Rows must form a
    /// square.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == size),
            "grid rows must form a square"
        );
        let cells = rows.into_iter().flatten().collect();
        TileGrid { size, cells }
    }

    /// The grid as rows, top to bottom.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size).map(|c| c.to_vec()).collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Cell at (row, col); `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Color at (row, col); `None` when empty or out of bounds.
    pub fn color(&self, row: usize, col: usize) -> Option<Tile> {
        self.get(row, col).flatten()
    }

    /// Set the cell at (row, col). Returns `false` when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        true
    }

    /// Swap the contents of two cells. No-op when either is out of
    /// bounds.
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) -> bool {
        if !self.in_bounds(a.0, a.1) || !self.in_bounds(b.0, b.1) {
            return false;
        }
        let ia = self.index(a.0, a.1);
        let ib = self.index(b.0, b.1);
        self.cells.swap(ia, ib);
        true
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Assign a uniform random palette color to every empty cell.
    /// Returns how many cells were filled.
    pub fn fill_empty<R: Rng + ?Sized>(&mut self, rng: &mut R, colors: u8) -> usize {
        let mut filled = 0;
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(Tile(rng.random_range(0..colors)));
                filled += 1;
            }
        }
        filled
    }

    /// Per-column stable compaction toward the bottom row. Tiles keep
    /// their top-to-bottom order; vacated cells collect at the top.
    pub fn drop_tiles(&mut self) {
        for col in 0..self.size {
            let mut column = Vec::with_capacity(self.size);
            for row in 0..self.size {
                if let Some(tile) = self.cells[row * self.size + col] {
                    column.push(tile);
                }
            }
            let empty_rows = self.size - column.len();
            for row in 0..self.size {
                self.cells[row * self.size + col] = if row < empty_rows {
                    None
                } else {
                    Some(column[row - empty_rows])
                };
            }
        }
    }
}

/// Boolean grid parallel to a [`TileGrid`], marking the cells that
/// participate in the most recently detected match set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchMask {
    size: usize,
    marked: Vec<bool>,
}

impl MatchMask {
    pub fn new(size: usize) -> Self {
        MatchMask {
            size,
            marked: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn mark(&mut self, row: usize, col: usize) {
        let idx = row * self.size + col;
        self.marked[idx] = true;
    }

    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marked[row * self.size + col]
    }

    pub fn any(&self) -> bool {
        self.marked.iter().any(|&m| m)
    }

    pub fn count(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }
}
