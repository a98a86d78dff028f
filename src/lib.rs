// Domain layer - rule tables and automaton rendering
pub mod domain;

// Application layer - job configuration and batch orchestration
pub mod application;

// Infrastructure layer - palettes and image output
pub mod rendering;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Dimensions, InitialRow, Raster, RenderError, RuleNumber, RuleTable};
pub use application::{Batch, BatchReport, RenderConfig};
pub use rendering::{ImageSink, Palette, PngFileSink};
