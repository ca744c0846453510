//! Coarse-to-fine pyramid alignment.
//!
//! Both images are halved `levels` times. The coarsest pair gets the full
//! exhaustive search; each finer level doubles the estimate from below and
//! runs a small refinement search around it. Cost is one full-window search
//! on a tiny image plus a few refinement candidates per level, which keeps
//! large scans tractable.

use ndarray::Array2;
use tracing::debug;

use crate::consts::{DEFAULT_REFINE_RADIUS, DEFAULT_SEARCH_RADIUS};
use crate::error::Result;
use crate::frame::Displacement;
use crate::pipeline::config::{DownsampleFilter, PyramidConfig};

use super::downsample::downsample_2x;
use super::exhaustive::{check_same_shape, search_window, Scoring};
use super::window::SearchWindow;

/// Pyramid alignment with default parameters: ±15 coarse window, ±2
/// refinement window, NCC over 10% cropped interiors, area downsampling.
///
/// `levels == 0` is exactly the exhaustive search.
pub fn align_pyramid(
    reference: &Array2<f32>,
    moving: &Array2<f32>,
    levels: usize,
) -> Result<Displacement> {
    let config = PyramidConfig {
        levels,
        search_radius: DEFAULT_SEARCH_RADIUS,
        refine_radius: DEFAULT_REFINE_RADIUS,
    };
    compute_offset_pyramid(
        reference,
        moving,
        &config,
        Scoring::default(),
        DownsampleFilter::default(),
    )
}

/// Compute the displacement of `moving` against `reference` using
/// coarse-to-fine refinement.
pub fn compute_offset_pyramid(
    reference: &Array2<f32>,
    moving: &Array2<f32>,
    config: &PyramidConfig,
    scoring: Scoring,
    filter: DownsampleFilter,
) -> Result<Displacement> {
    descend(reference, moving, config.levels, config, scoring, filter)
}

fn descend(
    reference: &Array2<f32>,
    moving: &Array2<f32>,
    level: usize,
    config: &PyramidConfig,
    scoring: Scoring,
    filter: DownsampleFilter,
) -> Result<Displacement> {
    check_same_shape(reference, moving)?;

    if level == 0 {
        let found = search_window(
            reference,
            moving,
            SearchWindow::symmetric(config.search_radius),
            scoring,
        )?;
        debug!(
            height = reference.nrows(),
            width = reference.ncols(),
            displacement = %found,
            "Coarsest level aligned"
        );
        return Ok(found);
    }

    let (ref_small, mov_small) = rayon::join(
        || downsample_2x(reference, filter),
        || downsample_2x(moving, filter),
    );
    let coarse = descend(&ref_small?, &mov_small?, level - 1, config, scoring, filter)?;

    // Falls back to `scaled` itself when the whole refinement window is degenerate.
    let scaled = coarse.scaled(2);
    let refined = search_window(
        reference,
        moving,
        SearchWindow::around(scaled, config.refine_radius),
        scoring,
    )?;

    debug!(
        level,
        height = reference.nrows(),
        width = reference.ncols(),
        scaled = %scaled,
        refined = %refined,
        "Pyramid level refined"
    );

    Ok(refined)
}
