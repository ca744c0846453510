#[allow(dead_code)]
mod common;

use ndarray::{array, Array2};

use trichrome_core::align::{circular_shift, shift_frame};
use trichrome_core::frame::{Displacement, Frame};

#[test]
fn test_shift_down_one_row_wraps_last_row_to_top() {
    let data = array![[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]];
    let shifted = circular_shift(&data, Displacement::new(1, 0));
    assert_eq!(shifted, array![[5.0f32, 6.0], [1.0, 2.0], [3.0, 4.0]]);
}

#[test]
fn test_shift_left_one_column() {
    let data = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let shifted = circular_shift(&data, Displacement::new(0, -1));
    assert_eq!(shifted, array![[2.0f32, 3.0, 1.0], [5.0, 6.0, 4.0]]);
}

#[test]
fn test_shift_matches_index_formula() {
    let (h, w) = (7usize, 11usize);
    let data = Array2::from_shape_fn((h, w), |(r, c)| (r * w + c) as f32);
    let d = Displacement::new(-3, 5);
    let shifted = circular_shift(&data, d);

    for i in 0..h {
        for j in 0..w {
            let si = (i as i64 - d.dy as i64).rem_euclid(h as i64) as usize;
            let sj = (j as i64 - d.dx as i64).rem_euclid(w as i64) as usize;
            assert_eq!(shifted[[i, j]], data[[si, sj]], "at ({i}, {j})");
        }
    }
}

#[test]
fn test_shift_round_trip_is_exact() {
    let data = common::noise(19, 23, 9);
    for &(dy, dx) in &[(0, 0), (1, 1), (-4, 7), (15, -15), (40, -31)] {
        let d = Displacement::new(dy, dx);
        let back = circular_shift(&circular_shift(&data, d), -d);
        assert_eq!(back, data, "round trip failed for {d}");
    }
}

#[test]
fn test_shift_zero_is_identity() {
    let data = common::noise(5, 6, 4);
    assert_eq!(circular_shift(&data, Displacement::ZERO), data);
}

#[test]
fn test_shift_frame_keeps_bit_depth() {
    let frame = Frame::new(common::noise(8, 8, 1), 8);
    let shifted = shift_frame(&frame, Displacement::new(2, 3));
    assert_eq!(shifted.original_bit_depth, 8);
    assert_eq!(shifted.data[[2, 3]], frame.data[[0, 0]]);
}
