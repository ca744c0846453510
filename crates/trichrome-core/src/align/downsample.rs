//! Anti-aliased 2x reduction used to build pyramid levels.

use ndarray::{Array2, Axis};
use rayon::prelude::*;

use crate::consts::{PARALLEL_PIXEL_THRESHOLD, PYRAMID_BLUR_SIGMA};
use crate::error::{Result, TrichromeError};
use crate::pipeline::config::DownsampleFilter;

/// Halve both dimensions of `data` (floor), low-pass filtering first.
///
/// - `Area`: each output pixel is the mean of its 2x2 source block.
/// - `Gaussian`: separable Gaussian blur (sigma 1.0, clamped border), then
///   the top-left sample of each 2x2 block.
///
/// An odd trailing row or column is dropped. Fails when either halved
/// dimension would be zero.
pub fn downsample_2x(data: &Array2<f32>, filter: DownsampleFilter) -> Result<Array2<f32>> {
    let (h, w) = data.dim();
    let (new_h, new_w) = (h / 2, w / 2);
    if new_h == 0 || new_w == 0 {
        return Err(TrichromeError::InvalidDimensions {
            width: w,
            height: h,
        });
    }

    let result = match filter {
        DownsampleFilter::Area => Array2::from_shape_fn((new_h, new_w), |(r, c)| {
            let (r2, c2) = (r * 2, c * 2);
            0.25 * (data[[r2, c2]]
                + data[[r2, c2 + 1]]
                + data[[r2 + 1, c2]]
                + data[[r2 + 1, c2 + 1]])
        }),
        DownsampleFilter::Gaussian => {
            let blurred = gaussian_blur_array(data, PYRAMID_BLUR_SIGMA);
            Array2::from_shape_fn((new_h, new_w), |(r, c)| blurred[[r * 2, c * 2]])
        }
    };

    Ok(result)
}

/// Gaussian blur using separable 1D convolution with a clamped border.
pub fn gaussian_blur_array(data: &Array2<f32>, sigma: f32) -> Array2<f32> {
    let kernel = make_gaussian_kernel(sigma);
    let row_pass = convolve(data, &kernel, Pass::Row);
    convolve(&row_pass, &kernel, Pass::Col)
}

fn make_gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as usize;
    let s2 = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..2 * radius + 1)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-x * x / s2).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

#[derive(Clone, Copy)]
enum Pass {
    Row,
    Col,
}

fn convolve(data: &Array2<f32>, kernel: &[f32], pass: Pass) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() as isize / 2;

    let sample = |row: usize, col: usize| -> f32 {
        kernel
            .iter()
            .enumerate()
            .map(|(ki, &kv)| {
                let off = ki as isize - radius;
                let v = match pass {
                    Pass::Row => data[[row, (col as isize + off).clamp(0, w as isize - 1) as usize]],
                    Pass::Col => data[[(row as isize + off).clamp(0, h as isize - 1) as usize, col]],
                };
                v * kv
            })
            .sum()
    };

    let mut result = Array2::<f32>::zeros((h, w));
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut out_row)| {
                for (col, out) in out_row.iter_mut().enumerate() {
                    *out = sample(row, col);
                }
            });
    } else {
        for ((row, col), out) in result.indexed_iter_mut() {
            *out = sample(row, col);
        }
    }
    result
}
