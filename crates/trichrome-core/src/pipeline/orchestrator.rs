use std::path::{Path, PathBuf};

use tracing::info;

use crate::align::align_channels;
use crate::error::Result;
use crate::frame::{ColorFrame, Frame};
use crate::io::image_io::{load_plate, save_color_image, save_image};
use crate::plate::{composite, split_plate};

use super::config::{AlignmentConfig, PipelineConfig};
use super::types::{NoOpReporter, PipelineOutput, PipelineStage, ProgressReporter};

/// Split, align and composite an already-decoded plate. No file I/O.
pub fn process_plate(
    plate: &Frame,
    alignment: &AlignmentConfig,
    reporter: &dyn ProgressReporter,
) -> Result<PipelineOutput> {
    alignment.validate()?;

    reporter.begin_stage(PipelineStage::Splitting);
    let stack = split_plate(plate)?;
    info!(
        width = stack.blue.width(),
        height = stack.blue.height(),
        "Plate split into channels"
    );
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Aligning);
    let method = alignment
        .method
        .resolve(stack.blue.height(), stack.blue.width());
    info!(method = %method, metric = %alignment.metric, "Aligning green and red to blue");
    let offsets = align_channels(&stack, alignment)?;
    info!(green = %offsets.green, red = %offsets.red, "Channel displacements resolved");
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Compositing);
    let color = composite(&stack, &offsets, alignment.crop_fraction)?;
    info!(
        width = color.width(),
        height = color.height(),
        "Color image composited"
    );
    reporter.finish_stage();

    Ok(PipelineOutput { color, offsets })
}

/// Run the full pipeline with a progress reporter: load the plate, align,
/// composite and write the color image.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: &dyn ProgressReporter,
) -> Result<PipelineOutput> {
    config.alignment.validate()?;

    reporter.begin_stage(PipelineStage::Reading);
    let plate = load_plate(&config.input)?;
    info!(
        input = %config.input.display(),
        width = plate.width(),
        height = plate.height(),
        bit_depth = plate.original_bit_depth,
        "Plate loaded"
    );
    reporter.finish_stage();

    let output = process_plate(&plate, &config.alignment, reporter)?;

    reporter.begin_stage(PipelineStage::Writing);
    save_color_image(&output.color, &config.output)?;
    if config.save_channels {
        save_channel_images(&output.color, &config.output)?;
    }
    info!(output = %config.output.display(), "Color output saved");
    reporter.finish_stage();

    Ok(output)
}

/// Run the full pipeline without progress reporting.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutput> {
    run_pipeline_reported(config, &NoOpReporter)
}

/// Path of a per-channel image written beside `output`:
/// `dir/result.tiff` becomes `dir/result_red.tiff`.
pub fn channel_path(output: &Path, channel: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".into());
    let name = match output.extension() {
        Some(ext) => format!("{stem}_{channel}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{channel}"),
    };
    output.with_file_name(name)
}

fn save_channel_images(color: &ColorFrame, output: &Path) -> Result<()> {
    for (name, frame) in [
        ("red", &color.red),
        ("green", &color.green),
        ("blue", &color.blue),
    ] {
        save_image(frame, &channel_path(output, name))?;
    }
    Ok(())
}
