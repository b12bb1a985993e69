use super::{
    analysis::AnalysisConfig,
    dashboard::DashboardConfig,
    report::ReportConfig,
    traits::ConfigSection,
    workbook::WorkbookConfig,
};
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up from the working directory by the binaries
pub const DEFAULT_CONFIG_FILE: &str = "dupont_analysis.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub workbook: WorkbookConfig,
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        check_section(&self.workbook)?;
        check_section(&self.analysis)?;
        check_section(&self.report)?;
        check_section(&self.dashboard)?;
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, AnalysisError> {
        let config: AppConfig = toml::from_str(contents)
            .map_err(|e| AnalysisError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::Configuration(format!("Failed to read config: {}", e)))?;

        Self::from_toml_str(&contents)
    }

    /// Load `path` when it exists, otherwise fall back to the built-in layout.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading configuration from {}", path.display());
            Self::load_from_file(path)
        } else {
            log::info!(
                "No configuration at {}, using the built-in workbook layout",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AnalysisError> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| AnalysisError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| AnalysisError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}

/// Prefix configuration errors with the TOML table they came from.
fn check_section<S: ConfigSection>(section: &S) -> Result<(), AnalysisError> {
    section.validate().map_err(|e| match e {
        AnalysisError::Configuration(msg) => {
            AnalysisError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}
