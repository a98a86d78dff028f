mod algorithm;
mod bit_row;
mod cell;
mod error;
mod raster;
mod rules;
mod seed;

pub use algorithm::Algorithm;
pub use bit_row::BitRow;
pub use cell::Cell;
pub use error::RenderError;
pub use raster::{Dimensions, Raster, evolve_row};
pub use rules::{INTERESTING_RULES, Pattern, RuleNumber, RuleTable, all_rules, interesting_rules};
pub use seed::InitialRow;
