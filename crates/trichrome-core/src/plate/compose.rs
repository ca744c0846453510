use crate::align::{crop_border, shift_frame};
use crate::error::{Result, TrichromeError};
use crate::frame::{ChannelOffsets, ChannelStack, ColorFrame, Frame};

/// Border-crop a frame, copying the interior.
pub fn crop_frame(frame: &Frame, fraction: f32) -> Frame {
    Frame::new(
        crop_border(&frame.data, fraction).to_owned(),
        frame.original_bit_depth,
    )
}

/// Build the color image: shift green and red by their displacements, crop
/// all three channels by `crop_fraction`, and stack them as RGB.
///
/// `crop_fraction` must be the fraction used when scoring the alignment so
/// the wrap-around band from the shift is removed.
pub fn composite(
    stack: &ChannelStack,
    offsets: &ChannelOffsets,
    crop_fraction: f32,
) -> Result<ColorFrame> {
    let dim = stack.blue.data.dim();
    for band in [&stack.green, &stack.red] {
        let (h, w) = band.data.dim();
        if (h, w) != dim {
            return Err(TrichromeError::ShapeMismatch {
                ref_width: dim.1,
                ref_height: dim.0,
                mov_width: w,
                mov_height: h,
            });
        }
    }

    let green = shift_frame(&stack.green, offsets.green);
    let red = shift_frame(&stack.red, offsets.red);

    Ok(ColorFrame {
        red: crop_frame(&red, crop_fraction),
        green: crop_frame(&green, crop_fraction),
        blue: crop_frame(&stack.blue, crop_fraction),
    })
}
