use std::sync::atomic::{AtomicBool, Ordering};

use super::{Algorithm, BitRow, Cell, InitialRow, RenderError, RuleTable};

/// Validated raster size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Both sides must be at least 1
    pub fn new(width: usize, height: usize) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Conventional size: height is half the width
    pub fn from_width(width: usize) -> Result<Self, RenderError> {
        Self::new(width, width / 2)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }
}

/// Raster holds one automaton generation per row.
/// Built once by `render` and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Raster {
    /// Render a raster from the default single seed
    pub fn render(
        table: &RuleTable,
        dimensions: Dimensions,
        algorithm: Algorithm,
    ) -> Result<Self, RenderError> {
        Self::render_with(table, dimensions, InitialRow::SingleSeed, algorithm, &AtomicBool::new(false))
    }

    /// Render a raster, checking `cancel` before every generation
    pub fn render_with(
        table: &RuleTable,
        dimensions: Dimensions,
        initial: InitialRow,
        algorithm: Algorithm,
        cancel: &AtomicBool,
    ) -> Result<Self, RenderError> {
        let Dimensions { width, height } = dimensions;
        let first = initial.build(width)?;

        let mut cells = Vec::with_capacity(width * height);
        cells.extend_from_slice(&first);

        match algorithm {
            Algorithm::Naive => {
                let mut row = first;
                for _ in 1..height {
                    check_cancelled(cancel)?;
                    row = evolve_row(&row, table);
                    cells.extend_from_slice(&row);
                }
            }
            Algorithm::BitSliced | Algorithm::BitSlicedParallel => {
                let mut row = BitRow::from_cells(&first);
                for _ in 1..height {
                    check_cancelled(cancel)?;
                    row = if algorithm == Algorithm::BitSliced {
                        row.evolve(table)
                    } else {
                        row.evolve_parallel(table)
                    };
                    row.extend_cells(&mut cells);
                }
            }
        }

        Ok(Self { width, height, cells })
    }

    /// Get raster dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// One generation
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// All generations, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % self.width, i / self.width, cell))
    }

    pub fn count_active(&self) -> usize {
        self.cells.iter().filter(|c| c.is_active()).count()
    }
}

/// Pure next generation: reads `prev` only and writes a fresh row.
/// Column `x + 1` is the center of window `x`, so the first and last
/// columns are never written.
pub fn evolve_row(prev: &[Cell], table: &RuleTable) -> Vec<Cell> {
    let mut next = vec![Cell::Inactive; prev.len()];
    for (x, window) in prev.windows(3).enumerate() {
        next[x + 1] = table.next(window[0], window[1], window[2]);
    }
    next
}

fn check_cancelled(cancel: &AtomicBool) -> Result<(), RenderError> {
    if cancel.load(Ordering::Relaxed) {
        Err(RenderError::Cancelled)
    } else {
        Ok(())
    }
}
