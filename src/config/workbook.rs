use super::traits::ConfigSection;
use crate::error::AnalysisError;
use crate::types::Metric;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;
use std::path::PathBuf;

/// Where the statements live inside the workbook.
///
/// Rows and columns are zero-based absolute sheet coordinates (`A1` is
/// `(0, 0)`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbookConfig {
    pub path: PathBuf,
    pub sheet: String,
    pub label_check: LabelCheck,
    /// Line items stored as positive magnitudes regardless of their sign in the sheet
    pub expense_metrics: Vec<Metric>,
    pub periods: PeriodLayout,
    pub metrics: Vec<MetricLocator>,
}

/// How row labels are checked against the configured rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelCheck {
    Off,
    Warn,
    Strict,
    Detect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodLayout {
    pub first_column: u32,
    pub count: usize,
    pub label_prefix: String,
    /// Row holding the period headings; generated labels are used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_row: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricLocator {
    pub metric: Metric,
    pub row: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MetricLocator {
    pub fn new(metric: Metric, row: u32) -> Self {
        Self {
            metric,
            row,
            label: None,
        }
    }

    /// Accepted row labels, lowercase
    pub fn labels(&self) -> Vec<String> {
        match &self.label {
            Some(label) => vec![label.trim().to_lowercase()],
            None => self.metric.aliases().into_iter().map(String::from).collect(),
        }
    }
}

impl Default for PeriodLayout {
    fn default() -> Self {
        Self {
            first_column: 5,
            count: 8,
            label_prefix: "Year".to_string(),
            header_row: None,
        }
    }
}

impl PeriodLayout {
    pub fn columns(&self) -> Range<u32> {
        self.first_column..self.first_column + self.count as u32
    }

    pub fn generated_label(&self, index: usize) -> String {
        format!("{} {}", self.label_prefix, index + 1)
    }
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Mid Retailer Financial Analysis - Blank.xlsx"),
            sheet: "Financial Statements".to_string(),
            label_check: LabelCheck::Warn,
            expense_metrics: vec![Metric::Cogs, Metric::SellingGeneralAdmin],
            periods: PeriodLayout::default(),
            metrics: Metric::all()
                .into_iter()
                .map(|m| MetricLocator::new(m, m.default_row()))
                .collect(),
        }
    }
}

impl WorkbookConfig {
    pub fn locator(&self, metric: Metric) -> Option<&MetricLocator> {
        self.metrics.iter().find(|l| l.metric == metric)
    }

    pub fn is_expense(&self, metric: Metric) -> bool {
        self.expense_metrics.contains(&metric)
    }
}

impl ConfigSection for WorkbookConfig {
    fn section_name() -> &'static str {
        "workbook"
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        if self.sheet.trim().is_empty() {
            return Err(AnalysisError::Configuration(
                "Sheet name must not be empty".to_string(),
            ));
        }
        if self.periods.count == 0 {
            return Err(AnalysisError::Configuration(
                "At least one period column is required".to_string(),
            ));
        }
        if u32::try_from(self.periods.count).is_err()
            || self
                .periods
                .first_column
                .checked_add(self.periods.count as u32)
                .is_none()
        {
            return Err(AnalysisError::Configuration(
                "Period columns exceed the sheet's addressable range".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for locator in &self.metrics {
            if !seen.insert(locator.metric) {
                return Err(AnalysisError::Configuration(format!(
                    "Metric '{}' is located more than once",
                    locator.metric
                )));
            }
        }
        for metric in Metric::all() {
            if !seen.contains(&metric) {
                return Err(AnalysisError::Configuration(format!(
                    "Metric '{}' has no row locator",
                    metric
                )));
            }
        }

        Ok(())
    }
}
