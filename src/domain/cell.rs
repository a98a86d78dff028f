/// Cell is the state of one automaton site (one pixel of the raster).
/// Colors are only attached when the raster is encoded.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Inactive,
    Active,
}

impl Cell {
    /// Check if the cell is active
    pub const fn is_active(self) -> bool {
        matches!(self, Cell::Active)
    }

    /// Convert a boolean bit into a cell
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Cell::Active } else { Cell::Inactive }
    }

    /// Numeric value used when packing cells into neighborhood indices
    pub const fn bit(self) -> u8 {
        match self {
            Cell::Inactive => 0,
            Cell::Active => 1,
        }
    }

    /// Digit used in textual dumps of rules and rows
    pub const fn digit(self) -> char {
        match self {
            Cell::Inactive => '0',
            Cell::Active => '1',
        }
    }
}
