pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{channel_path, process_plate, run_pipeline, run_pipeline_reported};
pub use types::{PipelineOutput, PipelineStage, ProgressReporter};
