pub mod align_args;
pub mod config;
pub mod info;
pub mod offsets;
pub mod pipeline;
