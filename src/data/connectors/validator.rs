use crate::config::{LabelCheck, MetricLocator, PeriodLayout, WorkbookConfig};
use crate::error::{AnalysisError, Result};
use crate::types::Metric;
use calamine::{Data, Range};
use std::collections::HashMap;

pub struct LayoutValidator;

impl LayoutValidator {
    /// Resolve the sheet row of every metric, checking row labels as configured.
    ///
    /// Each row may hold a single metric.
    pub fn resolve_rows(range: &Range<Data>, config: &WorkbookConfig) -> Result<HashMap<Metric, u32>> {
        let mut rows = HashMap::with_capacity(config.metrics.len());
        let mut claimed: HashMap<u32, Metric> = HashMap::with_capacity(config.metrics.len());

        for locator in &config.metrics {
            let row = Self::resolve_row(range, config, locator)?;
            if let Some(owner) = claimed.insert(row, locator.metric) {
                return Err(AnalysisError::Layout(format!(
                    "Row {} resolves to both '{}' and '{}'",
                    row, owner, locator.metric
                )));
            }
            rows.insert(locator.metric, row);
        }

        Ok(rows)
    }

    fn resolve_row(range: &Range<Data>, config: &WorkbookConfig, locator: &MetricLocator) -> Result<u32> {
        if config.label_check == LabelCheck::Off {
            return Ok(locator.row);
        }

        let expected = locator.labels();
        let found = Self::row_labels(range, locator.row, config.periods.first_column);
        if found.iter().any(|text| Self::label_matches(text, &expected)) {
            return Ok(locator.row);
        }

        match config.label_check {
            LabelCheck::Off => Ok(locator.row),
            LabelCheck::Warn => {
                log::warn!(
                    "Row {} for '{}' is labelled {:?}, expected one of {:?}",
                    locator.row,
                    locator.metric,
                    found,
                    expected
                );
                Ok(locator.row)
            }
            LabelCheck::Strict => Err(AnalysisError::Layout(format!(
                "Row {} for '{}' is labelled {:?}, expected one of {:?}",
                locator.row, locator.metric, found, expected
            ))),
            LabelCheck::Detect => {
                let detected = Self::find_labelled_row(range, locator, &config.periods)
                    .ok_or_else(|| {
                        AnalysisError::Layout(format!(
                            "No row labelled {:?} found for '{}'",
                            expected, locator.metric
                        ))
                    })?;
                if detected != locator.row {
                    log::info!(
                        "Relocated '{}' from row {} to row {}",
                        locator.metric,
                        locator.row,
                        detected
                    );
                }
                Ok(detected)
            }
        }
    }

    /// Text cells left of the first period column in `row`
    pub fn row_labels(range: &Range<Data>, row: u32, first_period_column: u32) -> Vec<String> {
        (0..first_period_column)
            .filter_map(|column| match range.get_value((row, column)) {
                Some(Data::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => None,
            })
            .collect()
    }

    /// Find the matching row with period data closest to the configured one.
    fn find_labelled_row(range: &Range<Data>, locator: &MetricLocator, periods: &PeriodLayout) -> Option<u32> {
        let (start, end) = (range.start()?, range.end()?);
        let expected = locator.labels();

        (start.0..=end.0)
            .filter(|&row| {
                Self::row_labels(range, row, periods.first_column)
                    .iter()
                    .any(|text| Self::label_matches(text, &expected))
            })
            .filter(|&row| Self::has_period_values(range, row, periods))
            .min_by_key(|&row| row.abs_diff(locator.row))
    }

    /// True when at least one period cell of `row` holds a number
    pub fn has_period_values(range: &Range<Data>, row: u32, periods: &PeriodLayout) -> bool {
        periods
            .columns()
            .any(|column| matches!(range.get_value((row, column)), Some(Data::Float(_) | Data::Int(_))))
    }

    /// Case-insensitive comparison ignoring surrounding space and a trailing colon
    pub fn label_matches(text: &str, expected: &[String]) -> bool {
        let normalized = text
            .trim()
            .trim_end_matches(':')
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        expected.iter().any(|label| *label == normalized)
    }

    /// Make sure every configured row and period column lies inside the used range.
    pub fn check_bounds(range: &Range<Data>, rows: &HashMap<Metric, u32>, config: &WorkbookConfig) -> Result<()> {
        let (Some(start), Some(end)) = (range.start(), range.end()) else {
            return Err(AnalysisError::Layout(format!(
                "Sheet '{}' is empty",
                config.sheet
            )));
        };

        let columns = config.periods.columns();
        if columns.start < start.1 || columns.end - 1 > end.1 {
            return Err(AnalysisError::Layout(format!(
                "Period columns {}..{} fall outside the used columns {}..={} of '{}'",
                columns.start, columns.end, start.1, end.1, config.sheet
            )));
        }

        let mut ordered: Vec<(&Metric, &u32)> = rows.iter().collect();
        ordered.sort();
        for (metric, &row) in ordered {
            if row < start.0 || row > end.0 {
                return Err(AnalysisError::Layout(format!(
                    "Row {} for '{}' falls outside the used rows {}..={} of '{}'",
                    row, metric, start.0, end.0, config.sheet
                )));
            }
        }

        Ok(())
    }
}
