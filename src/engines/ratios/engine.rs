// src/engines/ratios/engine.rs
use super::{EfficiencyRatios, LeverageRatios, ProfitabilityRatios};
use crate::data::FinancialStatements;
use crate::error::Result;
use polars::prelude::*;

/// Ratio tables derived from one set of statements
#[derive(Debug, Clone)]
pub struct RatioTables {
    pub profitability: DataFrame,
    pub efficiency: DataFrame,
    pub leverage: DataFrame,
}

pub struct RatioEngine;

impl RatioEngine {
    pub fn calculate_all(statements: &FinancialStatements) -> Result<RatioTables> {
        let profitability = ProfitabilityRatios::calculate(statements)?;
        let efficiency = EfficiencyRatios::calculate(statements)?;
        let leverage = LeverageRatios::calculate(statements)?;

        log::debug!(
            "Computed {} profitability, {} efficiency and {} leverage ratios over {} periods",
            profitability.width() - 1,
            efficiency.width() - 1,
            leverage.width() - 1,
            statements.period_count()
        );

        Ok(RatioTables {
            profitability,
            efficiency,
            leverage,
        })
    }
}
