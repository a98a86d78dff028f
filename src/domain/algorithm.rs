//! Algorithm enum for selecting the row evolution implementation.
//!
//! Every algorithm produces bit-identical rasters; they only differ in
//! storage and speed, which the benchmark binary compares.

use std::fmt;
use std::str::FromStr;

/// Available row evolution algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell enum rows, one neighborhood window at a time
    Naive,
    /// Bit-packed rows, 64 neighborhoods per word operation
    #[default]
    BitSliced,
    /// Bit-packed rows with the words of each row evaluated by rayon
    BitSlicedParallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![
            Algorithm::Naive,
            Algorithm::BitSliced,
            Algorithm::BitSlicedParallel,
        ]
    }

    /// Name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::BitSliced => "bitsliced",
            Algorithm::BitSlicedParallel => "bitsliced-par",
        }
    }

    /// Short description for help output
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Naive => "Cell enum rows, 1 byte/cell, serial",
            Algorithm::BitSliced => "Bit-packed rows, 64 cells at once",
            Algorithm::BitSlicedParallel => "Bit-packed rows, 64 cells at once, parallel words",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
                format!("unknown algorithm '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_algorithms_returns_three() {
        assert_eq!(Algorithm::all().len(), 3);
    }

    #[test]
    fn test_default_is_bitsliced() {
        assert_eq!(Algorithm::default(), Algorithm::BitSliced);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_parse_names() {
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("NAIVE".parse::<Algorithm>(), Ok(Algorithm::Naive));
        assert!("hashlife".parse::<Algorithm>().is_err());
    }
}
