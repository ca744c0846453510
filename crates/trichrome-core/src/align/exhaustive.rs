//! Brute-force displacement search over a bounded window.

use ndarray::Array2;
use rayon::prelude::*;
use tracing::debug;

use crate::consts::{DEFAULT_CROP_FRACTION, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{Result, TrichromeError};
use crate::frame::Displacement;
use crate::pipeline::config::SimilarityMetric;

use super::crop::crop_border;
use super::shift::circular_shift;
use super::window::SearchWindow;

/// How a candidate displacement is scored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scoring {
    pub metric: SimilarityMetric,
    /// Border fraction excluded from both arrays before scoring.
    pub crop_fraction: f32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            metric: SimilarityMetric::Ncc,
            crop_fraction: DEFAULT_CROP_FRACTION,
        }
    }
}

/// Find the displacement in `window` that best overlays `moving` onto
/// `reference`, using NCC over the 10% cropped interiors.
///
/// The returned displacement is the one to apply to `moving` with
/// [`circular_shift`].
pub fn align(
    reference: &Array2<f32>,
    moving: &Array2<f32>,
    window: SearchWindow,
) -> Result<Displacement> {
    search_window(reference, moving, window, Scoring::default())
}

/// Score every candidate in `window` and return the first one with the
/// highest score (dy outer, dx inner, ascending).
///
/// When every candidate is degenerate (scores negative infinity) the
/// window center is returned unchanged.
pub fn search_window(
    reference: &Array2<f32>,
    moving: &Array2<f32>,
    window: SearchWindow,
    scoring: Scoring,
) -> Result<Displacement> {
    check_same_shape(reference, moving)?;

    let ref_interior = crop_border(reference, scoring.crop_fraction);
    let candidates: Vec<Displacement> = window.candidates().collect();

    let score_candidate = |offset: &Displacement| -> f64 {
        let shifted = circular_shift(moving, *offset);
        let mov_interior = crop_border(&shifted, scoring.crop_fraction);
        scoring.metric.score(ref_interior, mov_interior)
    };

    // Scores are collected in enumeration order either way, so the
    // reduction below sees the same sequence.
    let scores: Vec<f64> = if ref_interior.len() >= PARALLEL_PIXEL_THRESHOLD {
        candidates.par_iter().map(score_candidate).collect()
    } else {
        candidates.iter().map(score_candidate).collect()
    };

    match first_best(&candidates, &scores) {
        Some(best) => Ok(best),
        None => {
            debug!(
                center = %window.center,
                candidates = candidates.len(),
                "All candidates degenerate, keeping window center"
            );
            Ok(window.center)
        }
    }
}

/// Running maximum with strict `>`: the earliest candidate wins ties, and
/// candidates scoring negative infinity (or NaN) never win.
fn first_best(candidates: &[Displacement], scores: &[f64]) -> Option<Displacement> {
    let mut best = None;
    let mut best_score = f64::NEG_INFINITY;
    for (&candidate, &score) in candidates.iter().zip(scores) {
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }
    best
}

pub(crate) fn check_same_shape(reference: &Array2<f32>, moving: &Array2<f32>) -> Result<()> {
    let (rh, rw) = reference.dim();
    let (mh, mw) = moving.dim();
    if rh != mh || rw != mw {
        return Err(TrichromeError::ShapeMismatch {
            ref_width: rw,
            ref_height: rh,
            mov_width: mw,
            mov_height: mh,
        });
    }
    Ok(())
}
