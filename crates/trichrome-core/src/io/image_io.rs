use std::path::Path;

use image::{GrayImage, ImageBuffer, ImageFormat, Luma, Rgb, RgbImage};
use ndarray::Array2;

use crate::error::{Result, TrichromeError};
use crate::frame::{ColorFrame, Frame};

/// Load a plate scan into a grayscale frame with values in [0, 1].
///
/// Any format the `image` crate decodes is accepted; color files are
/// reduced to luma. 8-bit sources keep their precision since they are
/// widened to 16 bits before normalizing.
pub fn load_plate(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let color = img.color();
    let bit_depth = if color.bytes_per_pixel() > color.channel_count() {
        16
    } else {
        8
    };
    let gray = img.to_luma16();
    let (w, h) = gray.dimensions();

    let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        gray.get_pixel(col as u32, row as u32).0[0] as f32 / 65535.0
    });

    Ok(Frame::new(data, bit_depth))
}

fn to_u16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 65535.0) as u16
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

fn buffer_error(w: usize, h: usize) -> TrichromeError {
    TrichromeError::InvalidDimensions {
        width: w,
        height: h,
    }
}

/// Save a frame as 16-bit grayscale TIFF.
pub fn save_tiff(frame: &Frame, path: &Path) -> Result<()> {
    let (h, w) = frame.data.dim();
    let pixels: Vec<u16> = frame.data.iter().map(|&v| to_u16(v)).collect();

    let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| buffer_error(w, h))?;
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a frame as 8-bit grayscale PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    let (h, w) = frame.data.dim();
    let pixels: Vec<u8> = frame.data.iter().map(|&v| to_u8(v)).collect();

    let img = GrayImage::from_raw(w as u32, h as u32, pixels).ok_or_else(|| buffer_error(w, h))?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save frame, choosing format from file extension.
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => save_png(frame, path),
        _ => save_tiff(frame, path),
    }
}

/// Save a ColorFrame as 16-bit RGB TIFF.
pub fn save_color_tiff(color: &ColorFrame, path: &Path) -> Result<()> {
    let (h, w) = color.red.data.dim();

    let mut pixels: Vec<u16> = Vec::with_capacity(h * w * 3);
    for ((&r, &g), &b) in color
        .red
        .data
        .iter()
        .zip(color.green.data.iter())
        .zip(color.blue.data.iter())
    {
        pixels.extend_from_slice(&[to_u16(r), to_u16(g), to_u16(b)]);
    }

    let img = ImageBuffer::<Rgb<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| buffer_error(w, h))?;
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a ColorFrame as 8-bit RGB PNG.
pub fn save_color_png(color: &ColorFrame, path: &Path) -> Result<()> {
    let (h, w) = color.red.data.dim();

    let mut img = RgbImage::new(w as u32, h as u32);
    for ((row, col), &r) in color.red.data.indexed_iter() {
        let g = color.green.data[[row, col]];
        let b = color.blue.data[[row, col]];
        img.put_pixel(col as u32, row as u32, Rgb([to_u8(r), to_u8(g), to_u8(b)]));
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a ColorFrame, choosing format from file extension.
/// `.png` writes 8-bit PNG; anything else writes 16-bit TIFF.
pub fn save_color_image(color: &ColorFrame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => save_color_png(color, path),
        _ => save_color_tiff(color, path),
    }
}
