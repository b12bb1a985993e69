use crate::error::{AnalysisError, Result};
use crate::types::{Metric, Statement, PERIOD_COLUMN};
use polars::prelude::*;
use std::collections::HashMap;

/// The three normalized statement tables, one row per period.
///
/// Every frame starts with the [`PERIOD_COLUMN`] string column followed by one
/// `Float64` column per metric of that statement. Missing values are `NaN`.
#[derive(Debug, Clone)]
pub struct FinancialStatements {
    periods: Vec<String>,
    income_statement: DataFrame,
    assets: DataFrame,
    liabilities_equity: DataFrame,
}

impl FinancialStatements {
    /// Build the statement tables from one series per metric.
    ///
    /// Every metric of every statement must be present and carry exactly one
    /// value per period.
    pub fn from_series(periods: Vec<String>, series: HashMap<Metric, Vec<f64>>) -> Result<Self> {
        if periods.is_empty() {
            return Err(AnalysisError::Statement(
                "At least one period is required".to_string(),
            ));
        }

        for metric in Metric::all() {
            match series.get(&metric) {
                None => {
                    return Err(AnalysisError::Statement(format!(
                        "Missing metric '{}' ({})",
                        metric,
                        metric.statement().title()
                    )));
                }
                Some(values) if values.len() != periods.len() => {
                    return Err(AnalysisError::Statement(format!(
                        "Metric '{}' has {} values, expected {}",
                        metric,
                        values.len(),
                        periods.len()
                    )));
                }
                Some(_) => {}
            }
        }

        let income_statement = Self::statement_frame(&periods, Statement::IncomeStatement, &series)?;
        let assets = Self::statement_frame(&periods, Statement::Assets, &series)?;
        let liabilities_equity =
            Self::statement_frame(&periods, Statement::LiabilitiesEquity, &series)?;

        Ok(Self {
            periods,
            income_statement,
            assets,
            liabilities_equity,
        })
    }

    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    pub fn statement(&self, statement: Statement) -> &DataFrame {
        match statement {
            Statement::IncomeStatement => &self.income_statement,
            Statement::Assets => &self.assets,
            Statement::LiabilitiesEquity => &self.liabilities_equity,
        }
    }

    pub fn income_statement(&self) -> &DataFrame {
        &self.income_statement
    }

    pub fn assets(&self) -> &DataFrame {
        &self.assets
    }

    pub fn liabilities_equity(&self) -> &DataFrame {
        &self.liabilities_equity
    }

    /// Values of one metric in period order
    pub fn values(&self, metric: Metric) -> Result<Vec<f64>> {
        column_values(self.statement(metric.statement()), metric.as_str())
    }

    /// All three statements side by side, sharing a single period column.
    pub fn combined(&self) -> Result<DataFrame> {
        let assets = self.assets.drop(PERIOD_COLUMN)?;
        let liabilities_equity = self.liabilities_equity.drop(PERIOD_COLUMN)?;

        let combined = self
            .income_statement
            .hstack(assets.get_columns())?
            .hstack(liabilities_equity.get_columns())?;

        Ok(combined)
    }

    fn statement_frame(
        periods: &[String],
        statement: Statement,
        series: &HashMap<Metric, Vec<f64>>,
    ) -> Result<DataFrame> {
        let metrics = statement.metrics();
        let mut columns = Vec::with_capacity(metrics.len() + 1);
        columns.push(Column::new(PERIOD_COLUMN.into(), periods));

        for metric in metrics {
            let values = series.get(&metric).ok_or_else(|| {
                AnalysisError::Statement(format!("Missing metric '{}'", metric))
            })?;
            columns.push(Column::new(metric.as_str().into(), values.as_slice()));
        }

        Ok(DataFrame::new(columns)?)
    }
}

/// Read a numeric column as `f64`, mapping nulls to `NaN`.
pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    let values = column
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect();

    Ok(values)
}

/// Read the period labels of a derived table.
pub fn period_labels(df: &DataFrame) -> Result<Vec<String>> {
    let column = df.column(PERIOD_COLUMN)?;
    let labels = column
        .str()?
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect();

    Ok(labels)
}
