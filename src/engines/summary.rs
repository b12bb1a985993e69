// src/engines/summary.rs
use super::dupont::{DuPontAnalysis, DuPontEngine};
use super::ratios::{ProfitabilityRatios, RatioTables};
use crate::data::{column_values, FinancialStatements};
use crate::error::Result;
use crate::types::{Metric, PERIOD_COLUMN};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoeTrend {
    Increasing,
    Decreasing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginTrend {
    Improving,
    Declining,
}

impl fmt::Display for RoeTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
        })
    }
}

impl fmt::Display for MarginTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioAverage {
    pub ratio: String,
    pub mean: f64,
}

/// Last period of the 3-step decomposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestDuPont {
    pub period: String,
    pub roe: f64,
    pub net_profit_margin: f64,
    pub asset_turnover: f64,
    pub equity_multiplier: f64,
}

/// Scalar view of the whole history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub periods: usize,
    pub revenue_cagr: f64,
    pub net_income_cagr: f64,
    pub profitability_averages: Vec<RatioAverage>,
    pub efficiency_averages: Vec<RatioAverage>,
    pub latest: LatestDuPont,
    pub roe_trend: RoeTrend,
    pub margin_trend: MarginTrend,
}

impl FinancialSummary {
    /// Mean of a profitability or efficiency ratio by name
    pub fn average(&self, ratio: &str) -> Option<f64> {
        self.profitability_averages
            .iter()
            .chain(&self.efficiency_averages)
            .find(|a| a.ratio == ratio)
            .map(|a| a.mean)
    }
}

pub struct SummaryReporter;

impl SummaryReporter {
    pub fn summarize(
        statements: &FinancialStatements,
        ratios: &RatioTables,
        dupont: &DuPontAnalysis,
    ) -> Result<FinancialSummary> {
        let periods = statements.period_count();
        let revenue = statements.values(Metric::Revenue)?;
        let net_income = statements.values(Metric::NetIncome)?;

        let roe = column_values(&ratios.profitability, ProfitabilityRatios::RETURN_ON_EQUITY)?;
        let margin = column_values(&ratios.profitability, ProfitabilityRatios::NET_PROFIT_MARGIN)?;

        let roe_trend = if Self::rose(&roe) {
            RoeTrend::Increasing
        } else {
            RoeTrend::Decreasing
        };
        let margin_trend = if Self::rose(&margin) {
            MarginTrend::Improving
        } else {
            MarginTrend::Declining
        };

        Ok(FinancialSummary {
            periods,
            revenue_cagr: Self::series_cagr(&revenue),
            net_income_cagr: Self::series_cagr(&net_income),
            profitability_averages: Self::averages(&ratios.profitability)?,
            efficiency_averages: Self::averages(&ratios.efficiency)?,
            latest: Self::latest(&dupont.three_step, statements)?,
            roe_trend,
            margin_trend,
        })
    }

    /// Compound annual growth rate between the first and last of `periods` values.
    ///
    /// `NaN` when it is undefined: fewer than two periods, a zero or
    /// non-finite start, or a sign change.
    pub fn cagr(first: f64, last: f64, periods: usize) -> f64 {
        if periods < 2 || first == 0.0 || !first.is_finite() || !last.is_finite() {
            return f64::NAN;
        }

        let growth = last / first;
        if growth < 0.0 {
            return f64::NAN;
        }

        growth.powf(1.0 / (periods - 1) as f64) - 1.0
    }

    /// Arithmetic mean skipping `NaN` periods
    pub fn mean(values: &[f64]) -> f64 {
        let present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if present.is_empty() {
            return f64::NAN;
        }
        present.iter().sum::<f64>() / present.len() as f64
    }

    fn series_cagr(values: &[f64]) -> f64 {
        match (values.first(), values.last()) {
            (Some(&first), Some(&last)) => Self::cagr(first, last, values.len()),
            _ => f64::NAN,
        }
    }

    // NaN on either end compares false
    fn rose(values: &[f64]) -> bool {
        match (values.first(), values.last()) {
            (Some(first), Some(last)) => last > first,
            _ => false,
        }
    }

    fn averages(table: &DataFrame) -> Result<Vec<RatioAverage>> {
        table
            .get_column_names()
            .into_iter()
            .filter(|name| name.as_str() != PERIOD_COLUMN)
            .map(|name| {
                let values = column_values(table, name.as_str())?;
                Ok(RatioAverage {
                    ratio: name.to_string(),
                    mean: Self::mean(&values),
                })
            })
            .collect()
    }

    fn latest(three_step: &DataFrame, statements: &FinancialStatements) -> Result<LatestDuPont> {
        let last = |name: &str| -> Result<f64> {
            Ok(column_values(three_step, name)?
                .last()
                .copied()
                .unwrap_or(f64::NAN))
        };

        Ok(LatestDuPont {
            period: statements.periods().last().cloned().unwrap_or_default(),
            roe: last(DuPontEngine::ROE_DIRECT)?,
            net_profit_margin: last(DuPontEngine::NET_PROFIT_MARGIN)?,
            asset_turnover: last(DuPontEngine::ASSET_TURNOVER)?,
            equity_multiplier: last(DuPontEngine::EQUITY_MULTIPLIER)?,
        })
    }
}
