// src/engines/ratios/efficiency.rs
use super::{evaluate, metric, safe_div};
use crate::data::FinancialStatements;
use crate::error::Result;
use crate::types::Metric;
use polars::prelude::*;

pub struct EfficiencyRatios;

impl EfficiencyRatios {
    pub const ASSET_TURNOVER: &'static str = "Asset Turnover";
    pub const WORKING_CAPITAL_TURNOVER: &'static str = "Working Capital Turnover";
    pub const CASH_TURNOVER: &'static str = "Cash Turnover";
    pub const RECEIVABLES_TURNOVER: &'static str = "A/R Turnover";
    pub const INVENTORY_TURNOVER: &'static str = "Inventory Turnover";

    pub fn names() -> [&'static str; 5] {
        [
            Self::ASSET_TURNOVER,
            Self::WORKING_CAPITAL_TURNOVER,
            Self::CASH_TURNOVER,
            Self::RECEIVABLES_TURNOVER,
            Self::INVENTORY_TURNOVER,
        ]
    }

    pub fn expressions() -> Vec<Expr> {
        let revenue = || metric(Metric::Revenue);
        let working_capital = metric(Metric::CurrentAssets) - metric(Metric::CurrentLiabilities);

        vec![
            safe_div(revenue(), metric(Metric::TotalAssets)).alias(Self::ASSET_TURNOVER),
            safe_div(revenue(), working_capital).alias(Self::WORKING_CAPITAL_TURNOVER),
            safe_div(revenue(), metric(Metric::Cash)).alias(Self::CASH_TURNOVER),
            safe_div(revenue(), metric(Metric::AccountsReceivable))
                .alias(Self::RECEIVABLES_TURNOVER),
            safe_div(metric(Metric::Cogs).abs(), metric(Metric::Inventory))
                .alias(Self::INVENTORY_TURNOVER),
        ]
    }

    pub fn calculate(statements: &FinancialStatements) -> Result<DataFrame> {
        evaluate(statements, Self::expressions())
    }
}
