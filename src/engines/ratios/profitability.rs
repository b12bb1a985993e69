// src/engines/ratios/profitability.rs
use super::{evaluate, metric, safe_div};
use crate::data::FinancialStatements;
use crate::error::Result;
use crate::types::Metric;
use polars::prelude::*;

pub struct ProfitabilityRatios;

impl ProfitabilityRatios {
    pub const RETURN_ON_EQUITY: &'static str = "Return on Equity";
    pub const RETURN_ON_ASSETS: &'static str = "Return on Assets";
    pub const GROSS_MARGIN: &'static str = "Gross Margin";
    pub const SGA_TO_REVENUE: &'static str = "SG&A % of Revenue";
    pub const EBITDA_MARGIN: &'static str = "EBITDA Margin";
    pub const EBIT_MARGIN: &'static str = "EBIT Margin";
    pub const NET_PROFIT_MARGIN: &'static str = "Net Profit Margin";

    pub fn names() -> [&'static str; 7] {
        [
            Self::RETURN_ON_EQUITY,
            Self::RETURN_ON_ASSETS,
            Self::GROSS_MARGIN,
            Self::SGA_TO_REVENUE,
            Self::EBITDA_MARGIN,
            Self::EBIT_MARGIN,
            Self::NET_PROFIT_MARGIN,
        ]
    }

    pub fn expressions() -> Vec<Expr> {
        let revenue = || metric(Metric::Revenue);

        vec![
            safe_div(metric(Metric::NetIncome), metric(Metric::TotalEquity))
                .alias(Self::RETURN_ON_EQUITY),
            safe_div(metric(Metric::NetIncome), metric(Metric::TotalAssets))
                .alias(Self::RETURN_ON_ASSETS),
            safe_div(metric(Metric::GrossProfit), revenue()).alias(Self::GROSS_MARGIN),
            // SG&A may be booked as a negative expense
            safe_div(metric(Metric::SellingGeneralAdmin).abs(), revenue())
                .alias(Self::SGA_TO_REVENUE),
            safe_div(metric(Metric::Ebitda), revenue()).alias(Self::EBITDA_MARGIN),
            safe_div(metric(Metric::Ebit), revenue()).alias(Self::EBIT_MARGIN),
            safe_div(metric(Metric::NetIncome), revenue()).alias(Self::NET_PROFIT_MARGIN),
        ]
    }

    pub fn calculate(statements: &FinancialStatements) -> Result<DataFrame> {
        evaluate(statements, Self::expressions())
    }
}
