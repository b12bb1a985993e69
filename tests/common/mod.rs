#![allow(dead_code)]

use dupont_analysis::data::FinancialStatements;
use dupont_analysis::types::Metric;
use std::collections::HashMap;

pub fn period_labels(periods: usize) -> Vec<String> {
    (1..=periods).map(|i| format!("Year {}", i)).collect()
}

/// Internally consistent retailer history: revenue grows 10% a year from 1000.
pub fn retailer_series(periods: usize) -> HashMap<Metric, Vec<f64>> {
    let mut series: HashMap<Metric, Vec<f64>> = HashMap::new();

    for year in 0..periods {
        let revenue = 1000.0 * 1.1f64.powi(year as i32);
        let cogs = 0.6 * revenue;
        let gross_profit = revenue - cogs;
        let sga = 0.2 * revenue;
        let other = 0.01 * revenue;
        let ebitda = gross_profit - sga - other;
        let depreciation = 0.03 * revenue;
        let ebit = ebitda - depreciation;
        let interest_expense = 10.0;
        let interest_income = 1.0;
        let ebt = ebit - interest_expense + interest_income;
        let taxes = 0.25 * ebt;
        let net_income = ebt - taxes;

        let cash = 0.05 * revenue;
        let receivables = 0.08 * revenue;
        let inventory = 0.12 * revenue;
        let current_assets = cash + receivables + inventory;
        let ppe = 0.2 * revenue;
        let other_assets = 0.02 * revenue;
        let total_assets = current_assets + ppe + other_assets;

        let payables = 0.07 * revenue;
        let current_liabilities = payables + 5.0;
        let long_term_debt = 0.1 * revenue;
        let total_liabilities = current_liabilities + long_term_debt;
        let total_equity = total_assets - total_liabilities;
        let common_equity = 0.5 * total_equity;
        let retained_earnings = total_equity - common_equity;

        let row = [
            (Metric::Revenue, revenue),
            (Metric::Cogs, cogs),
            (Metric::GrossProfit, gross_profit),
            (Metric::SellingGeneralAdmin, sga),
            (Metric::Other, other),
            (Metric::Ebitda, ebitda),
            (Metric::Depreciation, depreciation),
            (Metric::Ebit, ebit),
            (Metric::InterestExpense, interest_expense),
            (Metric::InterestIncome, interest_income),
            (Metric::Ebt, ebt),
            (Metric::Taxes, taxes),
            (Metric::NetIncome, net_income),
            (Metric::Cash, cash),
            (Metric::AccountsReceivable, receivables),
            (Metric::Inventory, inventory),
            (Metric::CurrentAssets, current_assets),
            (Metric::PropertyPlantEquipment, ppe),
            (Metric::OtherAssets, other_assets),
            (Metric::TotalAssets, total_assets),
            (Metric::AccountsPayable, payables),
            (Metric::CurrentLiabilities, current_liabilities),
            (Metric::LongTermDebt, long_term_debt),
            (Metric::TotalLiabilities, total_liabilities),
            (Metric::CommonEquity, common_equity),
            (Metric::RetainedEarnings, retained_earnings),
            (Metric::TotalEquity, total_equity),
            (Metric::TotalLiabilitiesEquity, total_liabilities + total_equity),
        ];
        for (metric, value) in row {
            series.entry(metric).or_default().push(value);
        }
    }

    series
}

pub fn retailer_statements(periods: usize) -> FinancialStatements {
    FinancialStatements::from_series(period_labels(periods), retailer_series(periods)).unwrap()
}

/// Retailer history with some metrics replaced wholesale.
pub fn statements_with(periods: usize, overrides: &[(Metric, Vec<f64>)]) -> FinancialStatements {
    let mut series = retailer_series(periods);
    for (metric, values) in overrides {
        series.insert(*metric, values.clone());
    }
    FinancialStatements::from_series(period_labels(periods), series).unwrap()
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {} of {}",
        actual,
        tolerance,
        expected
    );
}
