pub mod crop;
mod dispatcher;
pub mod downsample;
pub mod exhaustive;
pub mod metric;
pub mod pyramid;
pub mod shift;
pub mod window;

pub use crop::crop_border;
pub use dispatcher::{align_channels, compute_offset_configured};
pub use exhaustive::{align, search_window, Scoring};
pub use pyramid::{align_pyramid, compute_offset_pyramid};
pub use shift::{circular_shift, shift_frame};
pub use window::SearchWindow;
