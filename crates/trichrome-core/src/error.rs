use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrichromeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Shape mismatch: reference is {ref_width}x{ref_height}, moving is {mov_width}x{mov_height}")]
    ShapeMismatch {
        ref_width: usize,
        ref_height: usize,
        mov_width: usize,
        mov_height: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TrichromeError>;
