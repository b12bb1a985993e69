use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Workbook not found: {}", .0.display())]
    WorkbookNotFound(PathBuf),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Sheet '{sheet}' not found (available: {available:?})")]
    SheetNotFound { sheet: String, available: Vec<String> },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Non-numeric cell for {metric} at row {row}, column {column}: '{value}'")]
    NonNumeric {
        metric: String,
        row: u32,
        column: u32,
        value: String,
    },

    #[error("Statement error: {0}")]
    Statement(String),

    #[error("Rendering error: {0}")]
    Rendering(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Coarse classification used to decide whether a failure ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingResource,
    Structural,
    Rendering,
    Configuration,
    Internal,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WorkbookNotFound(_) | Self::Workbook(_) => ErrorKind::MissingResource,
            Self::SheetNotFound { .. }
            | Self::Layout(_)
            | Self::NonNumeric { .. }
            | Self::Statement(_) => ErrorKind::Structural,
            Self::Rendering(_) => ErrorKind::Rendering,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Io(_) | Self::Polars(_) | Self::Serde(_) => ErrorKind::Internal,
        }
    }

    /// Rendering failures are reported and skipped; everything else aborts.
    pub fn is_terminal(&self) -> bool {
        self.kind() != ErrorKind::Rendering
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
