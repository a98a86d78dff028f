use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Cell, RenderError};

/// Contents of generation 0
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum InitialRow {
    /// A single active cell at column `width / 2`
    #[default]
    SingleSeed,
    /// Each cell active with probability `density`, reproducible from `seed`
    Random { density: f64, seed: u64 },
}

impl InitialRow {
    /// Check parameters before anything is allocated
    pub fn validate(&self) -> Result<(), RenderError> {
        match *self {
            InitialRow::SingleSeed => Ok(()),
            InitialRow::Random { density, .. } => {
                if (0.0..=1.0).contains(&density) {
                    Ok(())
                } else {
                    Err(RenderError::InvalidDensity(density))
                }
            }
        }
    }

    /// Build generation 0 for a row of `width` cells
    pub fn build(&self, width: usize) -> Result<Vec<Cell>, RenderError> {
        self.validate()?;

        let mut row = vec![Cell::Inactive; width];
        match *self {
            InitialRow::SingleSeed => {
                if let Some(center) = row.get_mut(width / 2) {
                    *center = Cell::Active;
                }
            }
            InitialRow::Random { density, seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                row.iter_mut()
                    .for_each(|cell| *cell = Cell::from_bit(rng.random_bool(density)));
            }
        }
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_seed_at_center() {
        let row = InitialRow::SingleSeed.build(8).unwrap();
        let active: Vec<usize> = (0..8).filter(|&x| row[x].is_active()).collect();
        assert_eq!(active, vec![4]);
    }

    #[test]
    fn test_single_seed_odd_width() {
        let row = InitialRow::SingleSeed.build(7).unwrap();
        assert!(row[3].is_active());
        assert_eq!(row.iter().filter(|c| c.is_active()).count(), 1);
    }

    #[test]
    fn test_random_is_reproducible() {
        let init = InitialRow::Random { density: 0.3, seed: 42 };
        assert_eq!(init.build(500).unwrap(), init.build(500).unwrap());
    }

    #[test]
    fn test_random_density_extremes() {
        let empty = InitialRow::Random { density: 0.0, seed: 1 }.build(64).unwrap();
        assert!(empty.iter().all(|c| !c.is_active()));

        let full = InitialRow::Random { density: 1.0, seed: 1 }.build(64).unwrap();
        assert!(full.iter().all(|c| c.is_active()));
    }

    #[test]
    fn test_invalid_density_rejected() {
        let init = InitialRow::Random { density: 1.5, seed: 0 };
        assert_eq!(init.build(10), Err(RenderError::InvalidDensity(1.5)));
        assert!(InitialRow::Random { density: f64::NAN, seed: 0 }.validate().is_err());
    }
}
