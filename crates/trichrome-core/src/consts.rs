/// Minimum pixel count (h*w) of the scored interior to score search
/// candidates in parallel with Rayon.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 16_384;

/// Default half-width of the exhaustive search window, in pixels.
pub const DEFAULT_SEARCH_RADIUS: u32 = 15;

/// Default half-width of the per-level pyramid refinement window, in pixels.
pub const DEFAULT_REFINE_RADIUS: u32 = 2;

/// Default border fraction excluded from scoring and from the composite.
pub const DEFAULT_CROP_FRACTION: f32 = 0.10;

/// Default number of pyramid levels when the pyramid method is requested
/// without an explicit level count.
pub const DEFAULT_PYRAMID_LEVELS: usize = 3;

/// Channel side length (smaller of height/width) at or below which
/// `AlignmentMethod::Auto` uses a single exhaustive search.
pub const AUTO_EXHAUSTIVE_MAX_SIDE: usize = 512;

/// Gaussian blur sigma used when building the pyramid with the Gaussian filter.
pub const PYRAMID_BLUR_SIGMA: f32 = 1.0;

/// Number of channels on a plate (blue, green, red from top to bottom).
pub const PLATE_CHANNEL_COUNT: usize = 3;
