use ndarray::s;

use crate::consts::PLATE_CHANNEL_COUNT;
use crate::error::{Result, TrichromeError};
use crate::frame::{ChannelStack, Frame};

/// Cut a plate into its three exposures, top to bottom: blue, green, red.
///
/// Each channel is `rows / 3` tall; leftover rows at the bottom are dropped.
pub fn split_plate(plate: &Frame) -> Result<ChannelStack> {
    let (rows, width) = plate.data.dim();
    let height = rows / PLATE_CHANNEL_COUNT;
    if height == 0 || width == 0 {
        return Err(TrichromeError::InvalidDimensions {
            width,
            height: rows,
        });
    }

    let band = |index: usize| {
        let top = index * height;
        Frame::new(
            plate.data.slice(s![top..top + height, ..]).to_owned(),
            plate.original_bit_depth,
        )
    };

    Ok(ChannelStack {
        blue: band(0),
        green: band(1),
        red: band(2),
    })
}
