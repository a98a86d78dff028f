use std::path::PathBuf;

use crate::domain::{Algorithm, Dimensions, InitialRow, RenderError, RuleNumber};
use crate::rendering::Palette;

pub const DEFAULT_WIDTH: usize = 1000;
pub const DEFAULT_PREFIX: &str = "cellularAutomaton";

/// Everything a batch needs besides the rule list
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    /// Defaults to `width / 2`
    pub height: Option<usize>,
    pub palette: Palette,
    pub algorithm: Algorithm,
    pub initial_row: InitialRow,
    pub output_dir: PathBuf,
    pub file_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: None,
            palette: Palette::default(),
            algorithm: Algorithm::default(),
            initial_row: InitialRow::default(),
            output_dir: PathBuf::from("."),
            file_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl RenderConfig {
    /// Set width (builder pattern)
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_initial_row(mut self, initial_row: InitialRow) -> Self {
        self.initial_row = initial_row;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Validated raster size
    pub fn dimensions(&self) -> Result<Dimensions, RenderError> {
        match self.height {
            Some(height) => Dimensions::new(self.width, height),
            None => Dimensions::from_width(self.width),
        }
    }

    /// `<output_dir>/<prefix><rule>.png`
    pub fn output_path(&self, rule: RuleNumber) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.png", self.file_prefix, rule))
    }
}
