use ndarray::Array2;

use trichrome_core::align::crop::{border_margin, crop_border};

#[test]
fn test_crop_default_fraction_on_90x90() {
    let data = Array2::from_shape_fn((90, 90), |(r, c)| (r * 90 + c) as f32);
    let interior = crop_border(&data, 0.10);
    assert_eq!(interior.dim(), (72, 72));
    assert_eq!(interior[[0, 0]], data[[9, 9]]);
    assert_eq!(interior[[71, 71]], data[[80, 80]]);
}

#[test]
fn test_crop_margins_per_axis() {
    let data = Array2::<f32>::zeros((50, 25));
    // floor(50 * 0.1) = 5 rows, floor(25 * 0.1) = 2 columns
    assert_eq!(crop_border(&data, 0.10).dim(), (40, 21));
}

#[test]
fn test_crop_zero_fraction_is_full_view() {
    let data = Array2::<f32>::ones((13, 17));
    assert_eq!(crop_border(&data, 0.0).dim(), (13, 17));
}

#[test]
fn test_crop_small_array_has_no_margin() {
    let data = Array2::<f32>::ones((5, 9));
    assert_eq!(crop_border(&data, 0.10).dim(), (5, 9));
}

#[test]
fn test_border_margin_floor() {
    assert_eq!(border_margin(90, 0.10), 9);
    assert_eq!(border_margin(99, 0.10), 9);
    assert_eq!(border_margin(100, 0.10), 10);
    assert_eq!(border_margin(9, 0.10), 0);
}

#[test]
fn test_border_margin_clamps_oversized_fraction() {
    assert_eq!(border_margin(10, 0.9), 5);
    let data = Array2::<f32>::ones((10, 10));
    assert_eq!(crop_border(&data, 0.9).dim(), (0, 0));
}
