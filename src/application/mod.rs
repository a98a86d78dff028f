mod batch;
mod config;

pub use batch::{Batch, BatchReport, JobError, JobOutcome, render_rule};
pub use config::{DEFAULT_PREFIX, DEFAULT_WIDTH, RenderConfig};
