use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use image::RgbaImage;
use log::{debug, error, info};
use rayon::prelude::*;
use thiserror::Error;

use super::RenderConfig;
use crate::domain::{Raster, RenderError, RuleNumber, RuleTable};
use crate::rendering::{ImageSink, SinkError, to_image};

/// Why a single rule did not produce a file
#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Result of rendering and writing one rule
#[derive(Debug)]
pub struct JobOutcome {
    pub rule: RuleNumber,
    pub path: PathBuf,
    pub result: Result<(), JobError>,
    pub elapsed: Duration,
}

/// Per-job outcomes in rule-list order plus total wall-clock time
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<JobOutcome>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &JobOutcome> + '_ {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Batch orchestrates one independent job per rule number.
/// Jobs share nothing but the read-only config, the sink and the cancel flag.
pub struct Batch {
    rules: Vec<RuleNumber>,
    config: RenderConfig,
    parallel: bool,
}

impl Batch {
    /// Create a parallel batch
    pub fn new(rules: Vec<RuleNumber>, config: RenderConfig) -> Self {
        Self {
            rules,
            config,
            parallel: true,
        }
    }

    /// Choose between rayon jobs and a plain loop (builder pattern)
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn rules(&self) -> &[RuleNumber] {
        &self.rules
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Run every job to completion
    pub fn run(&self, sink: &dyn ImageSink) -> BatchReport {
        self.run_with_cancel(sink, &AtomicBool::new(false))
    }

    /// Run every job; jobs that see `cancel` set stop with `RenderError::Cancelled`
    pub fn run_with_cancel(&self, sink: &dyn ImageSink, cancel: &AtomicBool) -> BatchReport {
        let start = Instant::now();

        let outcomes: Vec<JobOutcome> = if self.parallel {
            self.rules
                .par_iter()
                .map(|&rule| self.run_job(rule, sink, cancel))
                .collect()
        } else {
            self.rules
                .iter()
                .map(|&rule| self.run_job(rule, sink, cancel))
                .collect()
        };

        let report = BatchReport {
            outcomes,
            elapsed: start.elapsed(),
        };
        info!(
            "Rendered {}/{} rules in {:?}",
            report.succeeded(),
            report.outcomes.len(),
            report.elapsed
        );
        report
    }

    fn run_job(&self, rule: RuleNumber, sink: &dyn ImageSink, cancel: &AtomicBool) -> JobOutcome {
        let start = Instant::now();
        let path = self.config.output_path(rule);

        let result = render_rule(rule, &self.config, cancel)
            .map_err(JobError::from)
            .and_then(|image| {
                info!("Saving image to: {}", path.display());
                sink.write(&image, &path).map_err(JobError::from)
            });

        if let Err(err) = &result {
            error!("Rule {} failed: {}", rule, err);
        }

        JobOutcome {
            rule,
            path,
            result,
            elapsed: start.elapsed(),
        }
    }
}

/// Render one rule with a config and paint it with the config's palette
pub fn render_rule(
    rule: RuleNumber,
    config: &RenderConfig,
    cancel: &AtomicBool,
) -> Result<RgbaImage, RenderError> {
    let dimensions = config.dimensions()?;
    let table = RuleTable::new(rule);
    debug!("Rule {} ({}):\n{}", rule, rule.binary(), table);

    let raster = Raster::render_with(
        &table,
        dimensions,
        config.initial_row,
        config.algorithm,
        cancel,
    )?;
    Ok(to_image(&raster, &config.palette))
}
