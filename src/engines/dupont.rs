//! DuPont decomposition of return on equity.
//!
//! Both variants carry the factors, the product of the factors, the directly
//! computed ROE and their difference. The difference is zero up to floating
//! point error for every period whose denominators are all non-zero; anything
//! else points at bad input data.

use super::ratios::{evaluate, metric, safe_div};
use crate::data::{column_values, period_labels, FinancialStatements};
use crate::error::Result;
use crate::types::Metric;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuPontVariant {
    ThreeStep,
    FiveStep,
}

impl DuPontVariant {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ThreeStep => "3-Step DuPont Analysis",
            Self::FiveStep => "5-Step DuPont Analysis",
        }
    }

    /// Column holding the product of the factors
    pub fn roe_column(&self) -> &'static str {
        match self {
            Self::ThreeStep => DuPontEngine::ROE_THREE_STEP,
            Self::FiveStep => DuPontEngine::ROE_FIVE_STEP,
        }
    }

    pub fn factors(&self) -> Vec<&'static str> {
        match self {
            Self::ThreeStep => vec![
                DuPontEngine::NET_PROFIT_MARGIN,
                DuPontEngine::ASSET_TURNOVER,
                DuPontEngine::EQUITY_MULTIPLIER,
            ],
            Self::FiveStep => vec![
                DuPontEngine::TAX_BURDEN,
                DuPontEngine::INTEREST_BURDEN,
                DuPontEngine::EBIT_MARGIN,
                DuPontEngine::ASSET_TURNOVER,
                DuPontEngine::EQUITY_MULTIPLIER,
            ],
        }
    }

    /// Definitions of every factor followed by the identity itself
    pub fn breakdown(&self) -> Vec<&'static str> {
        match self {
            Self::ThreeStep => vec![
                "Net Profit Margin = Net Income / Revenue",
                "Asset Turnover = Revenue / Total Assets",
                "Equity Multiplier = Total Assets / Total Equity",
                "ROE = Net Profit Margin × Asset Turnover × Equity Multiplier",
            ],
            Self::FiveStep => vec![
                "Tax Burden = Net Income / EBT",
                "Interest Burden = EBT / EBIT",
                "EBIT Margin = EBIT / Revenue",
                "Asset Turnover = Revenue / Total Assets",
                "Equity Multiplier = Total Assets / Total Equity",
                "ROE = Tax Burden × Interest Burden × EBIT Margin × Asset Turnover × Equity Multiplier",
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct DuPontAnalysis {
    pub three_step: DataFrame,
    pub five_step: DataFrame,
}

impl DuPontAnalysis {
    pub fn table(&self, variant: DuPontVariant) -> &DataFrame {
        match variant {
            DuPontVariant::ThreeStep => &self.three_step,
            DuPontVariant::FiveStep => &self.five_step,
        }
    }

    /// Periods of either table whose decomposition misses the direct ROE.
    pub fn discrepancies(&self, tolerance: f64) -> Result<Vec<Discrepancy>> {
        let mut found = DuPontEngine::reconcile(&self.three_step, DuPontVariant::ThreeStep, tolerance)?;
        found.extend(DuPontEngine::reconcile(
            &self.five_step,
            DuPontVariant::FiveStep,
            tolerance,
        )?);
        Ok(found)
    }
}

/// A period where decomposed and direct ROE disagree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub variant: DuPontVariant,
    pub period: String,
    pub decomposed: f64,
    pub direct: f64,
    pub difference: f64,
}

pub struct DuPontEngine;

impl DuPontEngine {
    pub const NET_PROFIT_MARGIN: &'static str = "Net Profit Margin";
    pub const ASSET_TURNOVER: &'static str = "Asset Turnover";
    pub const EQUITY_MULTIPLIER: &'static str = "Equity Multiplier";
    pub const TAX_BURDEN: &'static str = "Tax Burden";
    pub const INTEREST_BURDEN: &'static str = "Interest Burden";
    pub const EBIT_MARGIN: &'static str = "EBIT Margin";
    pub const ROE_THREE_STEP: &'static str = "ROE (DuPont)";
    pub const ROE_FIVE_STEP: &'static str = "ROE (5-Step DuPont)";
    pub const ROE_DIRECT: &'static str = "ROE (Direct)";
    pub const DIFFERENCE: &'static str = "Difference";

    pub fn analyze(statements: &FinancialStatements) -> Result<DuPontAnalysis> {
        Ok(DuPontAnalysis {
            three_step: Self::three_step(statements)?,
            five_step: Self::five_step(statements)?,
        })
    }

    /// ROE = Net Profit Margin × Asset Turnover × Equity Multiplier
    pub fn three_step(statements: &FinancialStatements) -> Result<DataFrame> {
        let net_profit_margin = safe_div(metric(Metric::NetIncome), metric(Metric::Revenue));
        let asset_turnover = Self::asset_turnover();
        let equity_multiplier = Self::equity_multiplier();

        let decomposed = net_profit_margin.clone() * asset_turnover.clone() * equity_multiplier.clone();
        let direct = Self::direct_roe();

        evaluate(
            statements,
            vec![
                net_profit_margin.alias(Self::NET_PROFIT_MARGIN),
                asset_turnover.alias(Self::ASSET_TURNOVER),
                equity_multiplier.alias(Self::EQUITY_MULTIPLIER),
                decomposed.clone().alias(Self::ROE_THREE_STEP),
                direct.clone().alias(Self::ROE_DIRECT),
                (decomposed - direct).alias(Self::DIFFERENCE),
            ],
        )
    }

    /// ROE = Tax Burden × Interest Burden × EBIT Margin × Asset Turnover × Equity Multiplier
    pub fn five_step(statements: &FinancialStatements) -> Result<DataFrame> {
        let tax_burden = safe_div(metric(Metric::NetIncome), metric(Metric::Ebt));
        let interest_burden = safe_div(metric(Metric::Ebt), metric(Metric::Ebit));
        let ebit_margin = safe_div(metric(Metric::Ebit), metric(Metric::Revenue));
        let asset_turnover = Self::asset_turnover();
        let equity_multiplier = Self::equity_multiplier();

        let decomposed = tax_burden.clone()
            * interest_burden.clone()
            * ebit_margin.clone()
            * asset_turnover.clone()
            * equity_multiplier.clone();
        let direct = Self::direct_roe();

        evaluate(
            statements,
            vec![
                tax_burden.alias(Self::TAX_BURDEN),
                interest_burden.alias(Self::INTEREST_BURDEN),
                ebit_margin.alias(Self::EBIT_MARGIN),
                asset_turnover.alias(Self::ASSET_TURNOVER),
                equity_multiplier.alias(Self::EQUITY_MULTIPLIER),
                decomposed.clone().alias(Self::ROE_FIVE_STEP),
                direct.clone().alias(Self::ROE_DIRECT),
                (decomposed - direct).alias(Self::DIFFERENCE),
            ],
        )
    }

    /// Periods whose finite difference exceeds `tolerance`.
    ///
    /// `NaN` differences come from zero denominators and are not reported.
    pub fn reconcile(table: &DataFrame, variant: DuPontVariant, tolerance: f64) -> Result<Vec<Discrepancy>> {
        let periods = period_labels(table)?;
        let decomposed = column_values(table, variant.roe_column())?;
        let direct = column_values(table, Self::ROE_DIRECT)?;
        let difference = column_values(table, Self::DIFFERENCE)?;

        let found = periods
            .into_iter()
            .enumerate()
            .filter(|&(i, _)| difference[i].is_finite() && difference[i].abs() > tolerance)
            .map(|(i, period)| Discrepancy {
                variant,
                period,
                decomposed: decomposed[i],
                direct: direct[i],
                difference: difference[i],
            })
            .collect();

        Ok(found)
    }

    fn asset_turnover() -> Expr {
        safe_div(metric(Metric::Revenue), metric(Metric::TotalAssets))
    }

    fn equity_multiplier() -> Expr {
        safe_div(metric(Metric::TotalAssets), metric(Metric::TotalEquity))
    }

    fn direct_roe() -> Expr {
        safe_div(metric(Metric::NetIncome), metric(Metric::TotalEquity))
    }
}
