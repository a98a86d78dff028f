use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use image::Rgba;
use log::{LevelFilter, info, warn};
use simple_logger::SimpleLogger;

use rule_raster::{
    Algorithm, Batch, InitialRow, Palette, PngFileSink, RenderConfig, RuleNumber,
    application::{DEFAULT_PREFIX, DEFAULT_WIDTH},
    domain::{all_rules, interesting_rules},
    rendering::{DEFAULT_ACTIVE, DEFAULT_BACKGROUND, parse_color},
};

/// Render elementary cellular automata (Wolfram rules) to PNG images.
#[derive(Parser)]
#[command(name = "rule-raster", version)]
struct Args {
    /// Rule numbers to render; values outside 0-255 keep their low 8 bits.
    /// Defaults to a list of interesting rules.
    #[arg(allow_negative_numbers = true)]
    rules: Vec<i64>,

    /// Render all 256 rules
    #[arg(long, conflicts_with = "rules")]
    all: bool,

    /// Image width in pixels
    #[arg(long, short, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Image height in pixels (default: width / 2)
    #[arg(long)]
    height: Option<usize>,

    /// Background color as r,g,b[,a] or #rrggbb[aa]
    #[arg(long, value_parser = parse_color)]
    background: Option<Rgba<u8>>,

    /// Active cell color as r,g,b[,a] or #rrggbb[aa]
    #[arg(long, value_parser = parse_color)]
    active: Option<Rgba<u8>>,

    /// Row evolution algorithm: naive, bitsliced or bitsliced-par
    #[arg(long, default_value_t = Algorithm::default())]
    algorithm: Algorithm,

    /// Start from a random first row generated from this seed
    #[arg(long)]
    random_seed: Option<u64>,

    /// Fraction of active cells in a random first row
    #[arg(long, default_value_t = 0.5, requires = "random_seed")]
    density: f64,

    /// Directory for the PNG files (created if missing)
    #[arg(long, short, default_value = ".")]
    output_dir: PathBuf,

    /// File name prefix; files are named <prefix><rule>.png
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Render one rule at a time instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Log debug output (rule tables, per-job detail)
    #[arg(long, short, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    fn rule_numbers(&self) -> Vec<RuleNumber> {
        if self.all {
            return all_rules();
        }
        if self.rules.is_empty() {
            return interesting_rules();
        }
        self.rules
            .iter()
            .map(|&value| {
                let rule = RuleNumber::truncating(value);
                if !RuleNumber::in_range(value) {
                    warn!("Rule {} is outside 0-255, using rule {}", value, rule);
                }
                rule
            })
            .collect()
    }

    fn config(&self) -> RenderConfig {
        let palette = Palette::new(
            self.background.unwrap_or(DEFAULT_BACKGROUND),
            self.active.unwrap_or(DEFAULT_ACTIVE),
        );
        let initial_row = match self.random_seed {
            Some(seed) => InitialRow::Random {
                density: self.density,
                seed,
            },
            None => InitialRow::SingleSeed,
        };

        let mut config = RenderConfig::default()
            .with_width(self.width)
            .with_palette(palette)
            .with_algorithm(self.algorithm)
            .with_initial_row(initial_row)
            .with_output_dir(self.output_dir.clone())
            .with_file_prefix(self.prefix.clone());
        if let Some(height) = self.height {
            config = config.with_height(height);
        }
        config
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    SimpleLogger::new()
        .with_level(args.log_level())
        .init()
        .context("failed to initialize logger")?;

    let config = args.config();
    config.dimensions().context("invalid image size")?;
    config
        .initial_row
        .validate()
        .context("invalid random first row")?;

    let batch = Batch::new(args.rule_numbers(), config).with_parallel(!args.sequential);
    info!(
        "Rendering {} rules at {}px with {}",
        batch.rules().len(),
        batch.config().width,
        batch.config().algorithm
    );

    let report = batch.run(&PngFileSink::new(true));

    println!("{:?}", report.elapsed);
    for failure in report.failures() {
        if let Err(err) = &failure.result {
            eprintln!("rule {}: {}", failure.rule, err);
        }
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
