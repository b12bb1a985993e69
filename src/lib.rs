pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod types;

pub use error::{AnalysisError, Result};
pub use pipeline::{Analysis, AnalysisPipeline};
