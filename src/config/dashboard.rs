use super::traits::ConfigSection;
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub enabled: bool,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// TrueType fonts tried in order; the first readable one is used for all text
    pub font_paths: Vec<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output: PathBuf::from("financial_analysis_dashboard.png"),
            width: 1800,
            height: 1200,
            title: "Mid Retailer Financial Analysis Dashboard".to_string(),
            font_paths: vec![
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
                PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"),
                PathBuf::from("/usr/share/fonts/dejavu/DejaVuSans.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf"),
                PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"),
                PathBuf::from("/Library/Fonts/Arial.ttf"),
                PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
            ],
        }
    }
}

impl ConfigSection for DashboardConfig {
    fn section_name() -> &'static str {
        "dashboard"
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        if self.width < 300 || self.height < 200 {
            return Err(AnalysisError::Configuration(
                "Dashboard must be at least 300x200 pixels".to_string(),
            ));
        }
        Ok(())
    }
}
