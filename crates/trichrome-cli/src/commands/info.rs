use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use trichrome_core::io::image_io::load_plate;
use trichrome_core::pipeline::config::AlignmentMethod;
use trichrome_core::plate::split_plate;

#[derive(Args)]
pub struct InfoArgs {
    /// Input plate image (three exposures stacked vertically)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let plate = load_plate(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let stack = split_plate(&plate)?;
    let leftover = plate.height() - 3 * stack.blue.height();

    println!("File:        {}", args.file.display());
    println!("Plate:       {}x{}", plate.width(), plate.height());
    println!("Bit depth:   {}", plate.original_bit_depth);
    println!(
        "Channels:    {}x{} (blue, green, red)",
        stack.blue.width(),
        stack.blue.height()
    );
    if leftover > 0 {
        println!("Dropped:     {} row(s) at the bottom", leftover);
    }
    println!(
        "Auto method: {}",
        AlignmentMethod::Auto.resolve(stack.blue.height(), stack.blue.width())
    );

    Ok(())
}
