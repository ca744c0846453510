#[allow(dead_code)]
mod common;

use ndarray::Array2;

use trichrome_core::align::downsample::downsample_2x;
use trichrome_core::align::{
    align, align_pyramid, circular_shift, compute_offset_pyramid, Scoring, SearchWindow,
};
use trichrome_core::error::TrichromeError;
use trichrome_core::frame::Displacement;
use trichrome_core::pipeline::config::{DownsampleFilter, PyramidConfig};

// ---------------------------------------------------------------------------
// downsample_2x
// ---------------------------------------------------------------------------

#[test]
fn test_area_downsample_averages_blocks() {
    let data = Array2::from_shape_fn((4, 4), |(r, c)| (r * 4 + c) as f32);
    let small = downsample_2x(&data, DownsampleFilter::Area).unwrap();
    assert_eq!(small.dim(), (2, 2));
    // Block (0,0) holds 0, 1, 4, 5
    assert!((small[[0, 0]] - 2.5).abs() < 1e-6);
    // Block (1,1) holds 10, 11, 14, 15
    assert!((small[[1, 1]] - 12.5).abs() < 1e-6);
}

#[test]
fn test_downsample_drops_odd_edge() {
    let data = Array2::<f32>::ones((7, 9));
    for filter in [DownsampleFilter::Area, DownsampleFilter::Gaussian] {
        let small = downsample_2x(&data, filter).unwrap();
        assert_eq!(small.dim(), (3, 4), "{filter}");
    }
}

#[test]
fn test_gaussian_downsample_keeps_constant() {
    let data = Array2::from_elem((16, 16), 0.6f32);
    let small = downsample_2x(&data, DownsampleFilter::Gaussian).unwrap();
    for v in small.iter() {
        assert!((v - 0.6).abs() < 1e-5);
    }
}

#[test]
fn test_downsample_single_row_fails() {
    let data = Array2::<f32>::ones((1, 8));
    let err = downsample_2x(&data, DownsampleFilter::Area).unwrap_err();
    assert!(matches!(
        err,
        TrichromeError::InvalidDimensions {
            width: 8,
            height: 1
        }
    ));
}

// ---------------------------------------------------------------------------
// align_pyramid
// ---------------------------------------------------------------------------

#[test]
fn test_zero_levels_matches_exhaustive() {
    let reference = common::blob_scene(72, 72, 4);
    for &(dy, dx) in &[(0, 0), (3, -2), (-14, 9)] {
        let moving = circular_shift(&reference, Displacement::new(dy, dx));
        let exhaustive = align(&reference, &moving, SearchWindow::default()).unwrap();
        let pyramid = align_pyramid(&reference, &moving, 0).unwrap();
        assert_eq!(pyramid, exhaustive);
    }

    // Also for unrelated inputs, where the answer is arbitrary.
    let a = common::noise(40, 40, 1);
    let b = common::noise(40, 40, 2);
    assert_eq!(
        align_pyramid(&a, &b, 0).unwrap(),
        align(&a, &b, SearchWindow::default()).unwrap()
    );
}

#[test]
fn test_pyramid_identity() {
    let data = common::blob_scene(128, 128, 8);
    assert_eq!(align_pyramid(&data, &data, 2).unwrap(), Displacement::ZERO);
}

#[test]
fn test_pyramid_recovers_shift_beyond_base_window() {
    let reference = common::blob_scene(256, 256, 21);
    let shift = Displacement::new(37, -45);
    let moving = circular_shift(&reference, shift);

    let d = align_pyramid(&reference, &moving, 2).unwrap();
    assert_eq!(d, -shift);
}

#[test]
fn test_pyramid_recovers_odd_shift() {
    let reference = common::blob_scene(192, 160, 33);
    let shift = Displacement::new(-13, 7);
    let moving = circular_shift(&reference, shift);

    let d = align_pyramid(&reference, &moving, 1).unwrap();
    assert_eq!(d, -shift);
}

#[test]
fn test_pyramid_gaussian_filter_recovers_shift() {
    let reference = common::blob_scene(256, 256, 5);
    let shift = Displacement::new(-22, 30);
    let moving = circular_shift(&reference, shift);

    let config = PyramidConfig {
        levels: 2,
        ..PyramidConfig::default()
    };
    let d = compute_offset_pyramid(
        &reference,
        &moving,
        &config,
        Scoring::default(),
        DownsampleFilter::Gaussian,
    )
    .unwrap();
    assert_eq!(d, -shift);
}

#[test]
fn test_pyramid_constant_input_falls_back_to_zero() {
    let flat = Array2::from_elem((64, 64), 0.2f32);
    assert_eq!(align_pyramid(&flat, &flat, 3).unwrap(), Displacement::ZERO);
}

#[test]
fn test_pyramid_too_many_levels_is_an_error() {
    let data = common::noise(8, 8, 3);
    // 8 -> 4 -> 2 -> 1 is fine, a fourth halving empties the array.
    assert!(align_pyramid(&data, &data, 3).is_ok());
    let err = align_pyramid(&data, &data, 4).unwrap_err();
    assert!(matches!(err, TrichromeError::InvalidDimensions { .. }));
}

#[test]
fn test_pyramid_shape_mismatch_is_an_error() {
    let reference = common::noise(64, 64, 1);
    let moving = common::noise(64, 62, 2);
    let err = align_pyramid(&reference, &moving, 2).unwrap_err();
    assert!(matches!(err, TrichromeError::ShapeMismatch { .. }));
}
