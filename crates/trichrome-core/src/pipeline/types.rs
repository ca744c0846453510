use crate::frame::{ChannelOffsets, ColorFrame};

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Reading,
    Splitting,
    Aligning,
    Compositing,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading plate"),
            Self::Splitting => write!(f, "Splitting channels"),
            Self::Aligning => write!(f, "Aligning channels"),
            Self::Compositing => write!(f, "Compositing"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Result of the pipeline.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub color: ColorFrame,
    pub offsets: ChannelOffsets,
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started.
    fn begin_stage(&self, _stage: PipelineStage) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
