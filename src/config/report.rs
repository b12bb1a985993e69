use super::traits::ConfigSection;
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimal places shown in printed tables
    pub precision: usize,
    pub max_table_columns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_json: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            max_table_columns: 32,
            summary_json: None,
        }
    }
}

impl ConfigSection for ReportConfig {
    fn section_name() -> &'static str {
        "report"
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        if self.precision > 12 {
            return Err(AnalysisError::Configuration(
                "Report precision must be at most 12 decimals".to_string(),
            ));
        }
        if self.max_table_columns == 0 {
            return Err(AnalysisError::Configuration(
                "Tables must show at least one column".to_string(),
            ));
        }
        Ok(())
    }
}
