use super::connectors::{LayoutValidator, WorkbookConnector};
use super::statements::FinancialStatements;
use crate::config::WorkbookConfig;
use crate::error::{AnalysisError, Result};
use crate::types::Metric;
use calamine::{Data, Range};
use std::collections::HashMap;

/// Turns the statement sheet of a workbook into [`FinancialStatements`].
pub struct StatementNormalizer {
    config: WorkbookConfig,
}

impl StatementNormalizer {
    pub fn new(config: WorkbookConfig) -> Self {
        Self { config }
    }

    /// Read the configured sheet from disk and normalize it.
    pub fn load(&self) -> Result<FinancialStatements> {
        let range = WorkbookConnector::load_sheet(&self.config.path, &self.config.sheet)?;
        self.normalize(&range)
    }

    pub fn normalize(&self, range: &Range<Data>) -> Result<FinancialStatements> {
        let rows = LayoutValidator::resolve_rows(range, &self.config)?;
        LayoutValidator::check_bounds(range, &rows, &self.config)?;

        let periods = self.period_labels(range);
        let mut series = HashMap::with_capacity(rows.len());

        for metric in Metric::all() {
            let row = *rows.get(&metric).ok_or_else(|| {
                AnalysisError::Layout(format!("Metric '{}' has no row locator", metric))
            })?;
            let mut values = self.read_row(range, metric, row)?;

            if self.config.is_expense(metric) {
                values.iter_mut().for_each(|v| *v = v.abs());
            }
            series.insert(metric, values);
        }

        FinancialStatements::from_series(periods, series)
    }

    fn read_row(&self, range: &Range<Data>, metric: Metric, row: u32) -> Result<Vec<f64>> {
        self.config
            .periods
            .columns()
            .map(|column| match range.get_value((row, column)) {
                Some(Data::Float(v)) => Ok(*v),
                Some(Data::Int(v)) => Ok(*v as f64),
                None | Some(Data::Empty) => {
                    log::warn!("Empty cell for '{}' at row {}, column {}", metric, row, column);
                    Ok(f64::NAN)
                }
                Some(Data::Error(e)) => {
                    log::warn!(
                        "Cell error {:?} for '{}' at row {}, column {}",
                        e,
                        metric,
                        row,
                        column
                    );
                    Ok(f64::NAN)
                }
                Some(other) => Err(AnalysisError::NonNumeric {
                    metric: metric.to_string(),
                    row,
                    column,
                    value: other.to_string(),
                }),
            })
            .collect()
    }

    fn period_labels(&self, range: &Range<Data>) -> Vec<String> {
        let layout = &self.config.periods;

        layout
            .columns()
            .enumerate()
            .map(|(index, column)| {
                let heading = layout
                    .header_row
                    .and_then(|row| range.get_value((row, column)))
                    .and_then(heading_text);
                heading.unwrap_or_else(|| layout.generated_label(index))
            })
            .collect()
    }
}

fn heading_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Data::Int(v) => Some(v.to_string()),
        Data::Float(v) if v.fract() == 0.0 => Some(format!("{}", *v as i64)),
        Data::Float(v) => Some(v.to_string()),
        _ => None,
    }
}
