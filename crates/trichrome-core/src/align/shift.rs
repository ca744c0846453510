use ndarray::{s, Array2};

use crate::frame::{Displacement, Frame};

/// Translate `data` by an integer displacement with wrap-around.
///
/// Output pixel `(i, j)` holds input pixel `((i - dy) mod h, (j - dx) mod w)`:
/// rows and columns pushed off one edge reappear on the opposite edge.
/// Shifting by `d` and then by `-d` reproduces the input exactly.
pub fn circular_shift(data: &Array2<f32>, offset: Displacement) -> Array2<f32> {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return data.clone();
    }

    let sy = (offset.dy as i64).rem_euclid(h as i64) as usize;
    let sx = (offset.dx as i64).rem_euclid(w as i64) as usize;
    if sy == 0 && sx == 0 {
        return data.clone();
    }

    // Four block copies, one per wrapped quadrant.
    let mut result = Array2::<f32>::zeros((h, w));
    result
        .slice_mut(s![sy.., sx..])
        .assign(&data.slice(s![..h - sy, ..w - sx]));
    result
        .slice_mut(s![sy.., ..sx])
        .assign(&data.slice(s![..h - sy, w - sx..]));
    result
        .slice_mut(s![..sy, sx..])
        .assign(&data.slice(s![h - sy.., ..w - sx]));
    result
        .slice_mut(s![..sy, ..sx])
        .assign(&data.slice(s![h - sy.., w - sx..]));
    result
}

/// Shift a frame by the given displacement with wrap-around.
pub fn shift_frame(frame: &Frame, offset: Displacement) -> Frame {
    Frame::new(
        circular_shift(&frame.data, offset),
        frame.original_bit_depth,
    )
}
