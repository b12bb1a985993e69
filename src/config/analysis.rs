use super::traits::ConfigSection;
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest accepted |decomposed ROE - direct ROE| before a period is reported
    pub reconciliation_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reconciliation_tolerance: 1e-9,
        }
    }
}

impl ConfigSection for AnalysisConfig {
    fn section_name() -> &'static str {
        "analysis"
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        if !self.reconciliation_tolerance.is_finite() || self.reconciliation_tolerance <= 0.0 {
            return Err(AnalysisError::Configuration(
                "Reconciliation tolerance must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}
