use ndarray::{s, Array2, ArrayView2};

/// Number of rows (or columns) removed from each side of an axis of
/// length `len` for the given border fraction.
///
/// Clamped to `len / 2` so an oversized fraction yields an empty interior
/// instead of an inverted slice.
pub fn border_margin(len: usize, fraction: f32) -> usize {
    let margin = (len as f64 * fraction as f64).floor();
    if margin <= 0.0 {
        0
    } else {
        (margin as usize).min(len / 2)
    }
}

/// View of the interior of `data` with a `fraction` border removed on every
/// side: `floor(h * fraction)` rows top and bottom, `floor(w * fraction)`
/// columns left and right.
///
/// Used both when scoring candidates and when cropping the final composite,
/// so the wrap-around band produced by a circular shift never counts.
pub fn crop_border(data: &Array2<f32>, fraction: f32) -> ArrayView2<'_, f32> {
    let (h, w) = data.dim();
    let my = border_margin(h, fraction);
    let mx = border_margin(w, fraction);
    data.slice(s![my..h - my, mx..w - mx])
}
