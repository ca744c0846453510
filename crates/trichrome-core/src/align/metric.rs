//! Similarity scores between two equally-shaped intensity regions.

use ndarray::{ArrayView2, Zip};

use crate::pipeline::config::SimilarityMetric;

/// Normalized cross-correlation of two regions.
///
/// Each region is zero-centered on its own mean, so the score ignores
/// brightness and contrast differences between channels. Returns a value in
/// [-1, 1], or `f64::NEG_INFINITY` when either region has zero variance
/// (or is empty) and therefore carries no usable match.
pub fn ncc(a: ArrayView2<'_, f32>, b: ArrayView2<'_, f32>) -> f64 {
    debug_assert_eq!(a.dim(), b.dim());
    let n = a.len();
    if n == 0 {
        return f64::NEG_INFINITY;
    }

    let mean_a = mean(a);
    let mean_b = mean(b);

    let mut cross = 0.0f64;
    let mut energy_a = 0.0f64;
    let mut energy_b = 0.0f64;
    Zip::from(&a).and(&b).for_each(|&va, &vb| {
        let a0 = va as f64 - mean_a;
        let b0 = vb as f64 - mean_b;
        cross += a0 * b0;
        energy_a += a0 * a0;
        energy_b += b0 * b0;
    });

    let denom = energy_a.sqrt() * energy_b.sqrt();
    if denom == 0.0 {
        return f64::NEG_INFINITY;
    }

    (cross / denom).clamp(-1.0, 1.0)
}

/// Sum of squared differences. Lower is better.
pub fn ssd(a: ArrayView2<'_, f32>, b: ArrayView2<'_, f32>) -> f64 {
    debug_assert_eq!(a.dim(), b.dim());
    let mut sum = 0.0f64;
    Zip::from(&a).and(&b).for_each(|&va, &vb| {
        let d = va as f64 - vb as f64;
        sum += d * d;
    });
    sum
}

fn mean(data: ArrayView2<'_, f32>) -> f64 {
    data.iter().map(|&v| v as f64).sum::<f64>() / data.len() as f64
}

impl SimilarityMetric {
    /// Score two regions so that higher always means more similar.
    ///
    /// SSD is negated. Empty regions score `f64::NEG_INFINITY` under every
    /// metric so they can never win a search.
    pub fn score(self, a: ArrayView2<'_, f32>, b: ArrayView2<'_, f32>) -> f64 {
        if a.is_empty() {
            return f64::NEG_INFINITY;
        }
        match self {
            SimilarityMetric::Ncc => ncc(a, b),
            SimilarityMetric::Ssd => -ssd(a, b),
        }
    }
}
