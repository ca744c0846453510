pub mod compose;
pub mod split;

pub use compose::{composite, crop_frame};
pub use split::split_plate;
