// src/engines/ratios/leverage.rs
use super::{evaluate, metric, safe_div};
use crate::data::FinancialStatements;
use crate::error::Result;
use crate::types::Metric;
use polars::prelude::*;

pub struct LeverageRatios;

impl LeverageRatios {
    pub const DEBT_TO_EQUITY: &'static str = "Debt to Equity";
    pub const DEBT_TO_ASSETS: &'static str = "Debt to Assets";
    pub const EQUITY_MULTIPLIER: &'static str = "Equity Multiplier";

    pub fn names() -> [&'static str; 3] {
        [Self::DEBT_TO_EQUITY, Self::DEBT_TO_ASSETS, Self::EQUITY_MULTIPLIER]
    }

    pub fn expressions() -> Vec<Expr> {
        vec![
            safe_div(metric(Metric::TotalLiabilities), metric(Metric::TotalEquity))
                .alias(Self::DEBT_TO_EQUITY),
            safe_div(metric(Metric::TotalLiabilities), metric(Metric::TotalAssets))
                .alias(Self::DEBT_TO_ASSETS),
            safe_div(metric(Metric::TotalAssets), metric(Metric::TotalEquity))
                .alias(Self::EQUITY_MULTIPLIER),
        ]
    }

    pub fn calculate(statements: &FinancialStatements) -> Result<DataFrame> {
        evaluate(statements, Self::expressions())
    }
}
