use ndarray::Array2;

use crate::error::Result;
use crate::frame::{ChannelOffsets, ChannelStack, Displacement};
use crate::pipeline::config::{AlignmentConfig, AlignmentMethod};

use super::exhaustive::{search_window, Scoring};
use super::pyramid::compute_offset_pyramid;
use super::window::SearchWindow;

/// Compute the displacement of `moving` against `reference` using the
/// configured method. `Auto` is resolved from the array size first.
pub fn compute_offset_configured(
    reference: &Array2<f32>,
    moving: &Array2<f32>,
    config: &AlignmentConfig,
) -> Result<Displacement> {
    let scoring = Scoring {
        metric: config.metric,
        crop_fraction: config.crop_fraction,
    };
    let (h, w) = reference.dim();

    match config.method.resolve(h, w) {
        AlignmentMethod::Exhaustive(params) => search_window(
            reference,
            moving,
            SearchWindow::symmetric(params.radius),
            scoring,
        ),
        AlignmentMethod::Pyramid(params) => {
            compute_offset_pyramid(reference, moving, &params, scoring, config.downsample)
        }
        AlignmentMethod::Auto => unreachable!("resolve() never returns Auto"),
    }
}

/// Align green and red to blue. The two searches are independent and run
/// concurrently.
pub fn align_channels(stack: &ChannelStack, config: &AlignmentConfig) -> Result<ChannelOffsets> {
    let (green, red) = rayon::join(
        || compute_offset_configured(&stack.blue.data, &stack.green.data, config),
        || compute_offset_configured(&stack.blue.data, &stack.red.data, config),
    );

    Ok(ChannelOffsets {
        green: green?,
        red: red?,
    })
}
