use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use trichrome_core::align::align_channels;
use trichrome_core::io::image_io::load_plate;
use trichrome_core::plate::split_plate;

use super::align_args::AlignArgs;
use crate::summary::print_offsets;

#[derive(Args)]
pub struct OffsetsArgs {
    /// Input plate image (three exposures stacked vertically)
    pub file: PathBuf,

    #[command(flatten)]
    pub align: AlignArgs,
}

pub fn run(args: &OffsetsArgs) -> Result<()> {
    let alignment = args.align.to_config()?;
    let plate = load_plate(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let stack = split_plate(&plate)?;

    let method = alignment
        .method
        .resolve(stack.blue.height(), stack.blue.width());
    tracing::debug!(method = %method, "Resolved alignment method");

    let offsets = align_channels(&stack, &alignment)?;

    println!("Method: {}", method);
    print_offsets(&offsets);

    Ok(())
}
