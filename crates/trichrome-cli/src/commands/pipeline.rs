use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use trichrome_core::pipeline::config::PipelineConfig;
use trichrome_core::pipeline::{run_pipeline_reported, PipelineStage, ProgressReporter};

use super::align_args::AlignArgs;
use crate::summary::{print_offsets, print_pipeline_summary};

/// Number of stages `run_pipeline_reported` walks through.
const STAGE_COUNT: u64 = 5;

#[derive(Args)]
pub struct RunArgs {
    /// Input plate image (three exposures stacked vertically)
    pub file: PathBuf,

    /// Pipeline config file (TOML); only FILE overrides it, other flags are ignored
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub align: AlignArgs,

    /// Also write the aligned channels as separate grayscale images
    #[arg(long)]
    pub save_channels: bool,

    /// Output file path (.png for 8-bit, .tif/.tiff for 16-bit)
    #[arg(short, long, default_value = "result.tiff")]
    pub output: PathBuf,
}

struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage) {
        self.bar.set_message(stage.to_string());
    }

    fn finish_stage(&self) {
        self.bar.inc(1);
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let mut config: PipelineConfig =
            toml::from_str(&contents).context("Invalid pipeline config")?;
        config.input = args.file.clone();
        config
    } else {
        PipelineConfig {
            input: args.file.clone(),
            output: args.output.clone(),
            alignment: args.align.to_config()?,
            save_channels: args.save_channels,
        }
    };
    tracing::debug!(?config, "Pipeline config resolved");

    print_pipeline_summary(&config);

    let bar = ProgressBar::new(STAGE_COUNT);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { bar };

    let output = run_pipeline_reported(&config, &reporter)
        .with_context(|| format!("Failed to process {}", config.input.display()))?;

    reporter.bar.finish_with_message("Done");
    print_offsets(&output.offsets);
    println!("\nOutput saved to {}", config.output.display());

    Ok(())
}
