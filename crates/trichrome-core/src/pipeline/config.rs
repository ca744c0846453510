use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{
    AUTO_EXHAUSTIVE_MAX_SIDE, DEFAULT_CROP_FRACTION, DEFAULT_PYRAMID_LEVELS,
    DEFAULT_REFINE_RADIUS, DEFAULT_SEARCH_RADIUS,
};
use crate::error::{Result, TrichromeError};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub alignment: AlignmentConfig,
    /// Also write the three cropped, aligned channels as grayscale images
    /// next to the output (`<stem>_red.<ext>` etc).
    #[serde(default)]
    pub save_channels: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlignmentConfig {
    #[serde(default)]
    pub method: AlignmentMethod,
    #[serde(default)]
    pub metric: SimilarityMetric,
    /// Border fraction excluded from scoring and from the composite.
    #[serde(default = "default_crop_fraction")]
    pub crop_fraction: f32,
    #[serde(default)]
    pub downsample: DownsampleFilter,
}

fn default_crop_fraction() -> f32 {
    DEFAULT_CROP_FRACTION
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            method: AlignmentMethod::default(),
            metric: SimilarityMetric::default(),
            crop_fraction: DEFAULT_CROP_FRACTION,
            downsample: DownsampleFilter::default(),
        }
    }
}

impl AlignmentConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.crop_fraction.is_finite() || !(0.0..0.5).contains(&self.crop_fraction) {
            return Err(TrichromeError::InvalidConfig(format!(
                "crop fraction must be in [0, 0.5), got {}",
                self.crop_fraction
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum AlignmentMethod {
    /// Brute-force search of every displacement within a radius.
    Exhaustive(ExhaustiveConfig),
    /// Coarse-to-fine search over a downsampled pyramid.
    Pyramid(PyramidConfig),
    /// Exhaustive for small channels, pyramid for large scans.
    #[default]
    Auto,
}

impl AlignmentMethod {
    /// Replace `Auto` with a concrete method for a `height` x `width`
    /// channel; other variants are returned unchanged.
    ///
    /// `Auto` halves the smaller side until it is at most
    /// [`AUTO_EXHAUSTIVE_MAX_SIDE`]; zero halvings means a plain exhaustive
    /// search.
    pub fn resolve(&self, height: usize, width: usize) -> AlignmentMethod {
        match self {
            AlignmentMethod::Auto => {
                let mut side = height.min(width);
                let mut levels = 0;
                while side > AUTO_EXHAUSTIVE_MAX_SIDE {
                    side /= 2;
                    levels += 1;
                }
                if levels == 0 {
                    AlignmentMethod::Exhaustive(ExhaustiveConfig::default())
                } else {
                    AlignmentMethod::Pyramid(PyramidConfig {
                        levels,
                        ..PyramidConfig::default()
                    })
                }
            }
            other => other.clone(),
        }
    }
}

impl std::fmt::Display for AlignmentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhaustive(p) => write!(f, "Exhaustive (±{})", p.radius),
            Self::Pyramid(p) => write!(
                f,
                "Pyramid ({} levels, ±{} coarse, ±{} refine)",
                p.levels, p.search_radius, p.refine_radius
            ),
            Self::Auto => write!(f, "Auto"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhaustiveConfig {
    pub radius: u32,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SEARCH_RADIUS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidConfig {
    /// Number of 2x reductions below the full-resolution level.
    pub levels: usize,
    /// Radius of the exhaustive search at the coarsest level.
    #[serde(default = "default_search_radius")]
    pub search_radius: u32,
    /// Radius of the refinement search at every finer level.
    #[serde(default = "default_refine_radius")]
    pub refine_radius: u32,
}

fn default_search_radius() -> u32 {
    DEFAULT_SEARCH_RADIUS
}

fn default_refine_radius() -> u32 {
    DEFAULT_REFINE_RADIUS
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            levels: DEFAULT_PYRAMID_LEVELS,
            search_radius: DEFAULT_SEARCH_RADIUS,
            refine_radius: DEFAULT_REFINE_RADIUS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarityMetric {
    /// Normalized cross-correlation, higher is better.
    #[default]
    Ncc,
    /// Sum of squared differences, lower is better.
    Ssd,
}

impl std::fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ncc => write!(f, "NCC"),
            Self::Ssd => write!(f, "SSD"),
        }
    }
}

/// Low-pass filter applied when halving a pyramid level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownsampleFilter {
    /// 2x2 box average.
    #[default]
    Area,
    /// Gaussian blur followed by decimation.
    Gaussian,
}

impl std::fmt::Display for DownsampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Area => write!(f, "Area"),
            Self::Gaussian => write!(f, "Gaussian"),
        }
    }
}
