//! Bit-packed automaton rows.
//! Each cell is stored as a single bit, so one generation step evaluates
//! 64 neighborhoods at once with plain bitwise operations.

use rayon::prelude::*;

use super::{Cell, RuleTable};

/// One generation of the automaton, 64 cells per `u64` word
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitRow {
    /// Width in cells
    width: usize,
    /// Row-major words; bits at or beyond `width` are always zero
    chunks: Vec<u64>,
}

impl BitRow {
    /// Create an all-inactive row
    pub fn new(width: usize) -> Self {
        Self {
            width,
            chunks: vec![0; width.div_ceil(64)],
        }
    }

    /// Pack a slice of cells
    pub fn from_cells(cells: &[Cell]) -> Self {
        let mut row = Self::new(cells.len());
        for (x, cell) in cells.iter().enumerate() {
            row.set(x, cell.is_active());
        }
        row
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get cell state at `x` (out of range reads as inactive)
    #[inline]
    pub fn get(&self, x: usize) -> bool {
        if x >= self.width {
            return false;
        }
        (self.chunks[x / 64] >> (x % 64)) & 1 == 1
    }

    /// Set cell state at `x` (out of range writes are ignored)
    #[inline]
    pub fn set(&mut self, x: usize, active: bool) {
        if x >= self.width {
            return;
        }
        if active {
            self.chunks[x / 64] |= 1u64 << (x % 64);
        } else {
            self.chunks[x / 64] &= !(1u64 << (x % 64));
        }
    }

    /// Bytes used by the packed cells
    pub fn memory_bytes(&self) -> usize {
        self.chunks.len() * std::mem::size_of::<u64>()
    }

    /// Population count
    pub fn count_active(&self) -> usize {
        self.chunks.iter().map(|c| c.count_ones() as usize).sum()
    }

    /// Unpack onto the end of a cell buffer
    pub fn extend_cells(&self, out: &mut Vec<Cell>) {
        out.extend((0..self.width).map(|x| Cell::from_bit(self.get(x))));
    }

    /// Word whose bit `b` holds the left neighbor of cell `64k + b`
    #[inline]
    fn left_neighbors(&self, k: usize) -> u64 {
        let carry = if k > 0 { self.chunks[k - 1] >> 63 } else { 0 };
        (self.chunks[k] << 1) | carry
    }

    /// Word whose bit `b` holds the right neighbor of cell `64k + b`
    #[inline]
    fn right_neighbors(&self, k: usize) -> u64 {
        let carry = self.chunks.get(k + 1).map_or(0, |next| next << 63);
        (self.chunks[k] >> 1) | carry
    }

    /// Bits of word `k` that are valid centers, i.e. columns `1..=width-2`
    #[inline]
    fn center_mask(&self, k: usize) -> u64 {
        if self.width < 3 {
            return 0;
        }
        let base = k * 64;
        let start = base.max(1);
        let end = (base + 63).min(self.width - 2);
        if start > end {
            return 0;
        }
        let len = end - start + 1;
        let ones = if len == 64 { u64::MAX } else { (1u64 << len) - 1 };
        ones << (start - base)
    }

    /// Compute word `k` of the next generation
    #[inline]
    fn next_chunk(&self, k: usize, active: &[u8]) -> u64 {
        let left = self.left_neighbors(k);
        let center = self.chunks[k];
        let right = self.right_neighbors(k);

        let hits = active.iter().fold(0u64, |acc, &index| {
            acc | select(left, index & 0b100 != 0)
                & select(center, index & 0b010 != 0)
                & select(right, index & 0b001 != 0)
        });
        hits & self.center_mask(k)
    }

    /// Next generation, reading only this row (serial)
    pub fn evolve(&self, table: &RuleTable) -> BitRow {
        let active = active_indices(table);
        let chunks = (0..self.chunks.len())
            .map(|k| self.next_chunk(k, &active))
            .collect();
        BitRow { width: self.width, chunks }
    }

    /// Next generation with words evaluated in parallel
    pub fn evolve_parallel(&self, table: &RuleTable) -> BitRow {
        let active = active_indices(table);
        let chunks = (0..self.chunks.len())
            .into_par_iter()
            .map(|k| self.next_chunk(k, &active))
            .collect();
        BitRow { width: self.width, chunks }
    }
}

/// Lanes where a neighbor matches the wanted state
#[inline]
const fn select(word: u64, wanted: bool) -> u64 {
    if wanted { word } else { !word }
}

fn active_indices(table: &RuleTable) -> Vec<u8> {
    table.active_patterns().iter().map(|p| p.index()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RuleNumber;

    fn table(rule: u8) -> RuleTable {
        RuleTable::new(RuleNumber::new(rule))
    }

    #[test]
    fn test_bitrow_get_set() {
        let mut row = BitRow::new(130);
        row.set(0, true);
        row.set(63, true);
        row.set(64, true);
        row.set(129, true);

        assert!(row.get(0));
        assert!(row.get(63));
        assert!(row.get(64));
        assert!(row.get(129));
        assert!(!row.get(1));
        assert_eq!(row.count_active(), 4);

        row.set(63, false);
        assert!(!row.get(63));
    }

    #[test]
    fn test_bitrow_bounds() {
        let mut row = BitRow::new(10);
        row.set(10, true);
        row.set(1000, true);
        assert_eq!(row.count_active(), 0);
        assert!(!row.get(1000));
    }

    #[test]
    fn test_center_mask_excludes_edges() {
        let row = BitRow::new(130);
        assert_eq!(row.center_mask(0), u64::MAX << 1);
        assert_eq!(row.center_mask(1), u64::MAX);
        // centers 128 only (129 is the last column)
        assert_eq!(row.center_mask(2), 1);

        assert_eq!(BitRow::new(2).center_mask(0), 0);
        assert_eq!(BitRow::new(3).center_mask(0), 0b10);
    }

    #[test]
    fn test_rule_30_first_step() {
        let mut row = BitRow::new(8);
        row.set(4, true);
        let next = row.evolve(&table(30));

        let active: Vec<usize> = (0..8).filter(|&x| next.get(x)).collect();
        assert_eq!(active, vec![3, 4, 5]);
    }

    #[test]
    fn test_neighbors_cross_word_boundary() {
        // Rule 4 keeps isolated cells (010 -> 1), rule 2 shifts left (001 -> 1)
        let mut row = BitRow::new(200);
        row.set(64, true);
        let shifted = row.evolve(&table(2));
        assert!(shifted.get(63));
        assert_eq!(shifted.count_active(), 1);

        let kept = row.evolve(&table(4));
        assert!(kept.get(64));
        assert_eq!(kept.count_active(), 1);
    }

    #[test]
    fn test_rule_255_fills_interior() {
        let row = BitRow::new(100);
        let next = row.evolve(&table(255));
        assert!(!next.get(0));
        assert!(!next.get(99));
        assert_eq!(next.count_active(), 98);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut row = BitRow::new(1000);
        for x in (0..1000).step_by(7) {
            row.set(x, true);
        }
        for rule in [30u8, 90, 110, 150, 255] {
            assert_eq!(row.evolve(&table(rule)), row.evolve_parallel(&table(rule)));
        }
    }
}
