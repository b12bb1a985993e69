// src/engines/ratios/mod.rs
pub mod profitability;
pub mod efficiency;
pub mod leverage;
pub mod engine;

pub use profitability::ProfitabilityRatios;
pub use efficiency::EfficiencyRatios;
pub use leverage::LeverageRatios;
pub use engine::{RatioEngine, RatioTables};

use crate::data::FinancialStatements;
use crate::error::Result;
use crate::types::{Metric, PERIOD_COLUMN};
use polars::prelude::*;

/// Column expression for a statement line item
pub fn metric(metric: Metric) -> Expr {
    col(metric.as_str())
}

/// Elementwise division that yields `NaN` for a zero or missing denominator.
pub fn safe_div(numerator: Expr, denominator: Expr) -> Expr {
    when(denominator.clone().neq(lit(0.0)))
        .then(numerator / denominator)
        .otherwise(lit(f64::NAN))
        .fill_null(lit(f64::NAN))
}

/// Evaluate named ratio expressions over the combined statements.
///
/// The result keeps the period column first, then one column per expression.
pub fn evaluate(statements: &FinancialStatements, ratios: Vec<Expr>) -> Result<DataFrame> {
    let mut exprs = Vec::with_capacity(ratios.len() + 1);
    exprs.push(col(PERIOD_COLUMN));
    exprs.extend(ratios);

    let table = statements.combined()?.lazy().select(exprs).collect()?;
    Ok(table)
}
