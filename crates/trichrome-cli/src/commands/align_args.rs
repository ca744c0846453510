use anyhow::Result;
use clap::{Args, ValueEnum};
use trichrome_core::pipeline::config::{
    AlignmentConfig, AlignmentMethod, DownsampleFilter, ExhaustiveConfig, PyramidConfig,
    SimilarityMetric,
};

#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Auto,
    Exhaustive,
    Pyramid,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    Ncc,
    Ssd,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DownsampleArg {
    Area,
    Gaussian,
}

/// Alignment flags shared by `run` and `offsets`.
#[derive(Args)]
pub struct AlignArgs {
    /// Alignment method
    #[arg(long, value_enum, default_value = "auto")]
    pub method: MethodArg,

    /// Search radius in pixels (exhaustive search, or coarsest pyramid level)
    #[arg(long, default_value = "15")]
    pub radius: u32,

    /// Number of pyramid levels (pyramid method)
    #[arg(long, default_value = "3")]
    pub levels: usize,

    /// Refinement radius at each finer pyramid level
    #[arg(long, default_value = "2")]
    pub refine_radius: u32,

    /// Similarity metric
    #[arg(long, value_enum, default_value = "ncc")]
    pub metric: MetricArg,

    /// Border fraction excluded from scoring and from the output (0.0-0.5)
    #[arg(long, default_value = "0.1")]
    pub crop: f32,

    /// Pyramid downsampling filter
    #[arg(long, value_enum, default_value = "area")]
    pub downsample: DownsampleArg,
}

impl AlignArgs {
    pub fn to_config(&self) -> Result<AlignmentConfig> {
        let method = match self.method {
            MethodArg::Auto => AlignmentMethod::Auto,
            MethodArg::Exhaustive => AlignmentMethod::Exhaustive(ExhaustiveConfig {
                radius: self.radius,
            }),
            MethodArg::Pyramid => AlignmentMethod::Pyramid(PyramidConfig {
                levels: self.levels,
                search_radius: self.radius,
                refine_radius: self.refine_radius,
            }),
        };
        let metric = match self.metric {
            MetricArg::Ncc => SimilarityMetric::Ncc,
            MetricArg::Ssd => SimilarityMetric::Ssd,
        };
        let downsample = match self.downsample {
            DownsampleArg::Area => DownsampleFilter::Area,
            DownsampleArg::Gaussian => DownsampleFilter::Gaussian,
        };

        let config = AlignmentConfig {
            method,
            metric,
            crop_fraction: self.crop,
            downsample,
        };
        config.validate()?;
        Ok(config)
    }
}
