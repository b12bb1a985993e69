mod common;

use common::{assert_close, retailer_statements, statements_with};
use dupont_analysis::data::column_values;
use dupont_analysis::engines::{DuPontEngine, DuPontVariant};
use dupont_analysis::types::Metric;
use polars::prelude::Column;

#[test]
fn test_three_step_matches_direct_roe() {
    let statements = retailer_statements(8);
    let table = DuPontEngine::three_step(&statements).unwrap();

    let decomposed = column_values(&table, DuPontEngine::ROE_THREE_STEP).unwrap();
    let direct = column_values(&table, DuPontEngine::ROE_DIRECT).unwrap();
    let difference = column_values(&table, DuPontEngine::DIFFERENCE).unwrap();

    assert_eq!(table.height(), 8);
    for p in 0..8 {
        assert!((decomposed[p] - direct[p]).abs() < 1e-9);
        assert!(difference[p].abs() < 1e-9);
    }
}

#[test]
fn test_five_step_matches_direct_roe() {
    let statements = retailer_statements(8);
    let table = DuPontEngine::five_step(&statements).unwrap();

    let decomposed = column_values(&table, DuPontEngine::ROE_FIVE_STEP).unwrap();
    let direct = column_values(&table, DuPontEngine::ROE_DIRECT).unwrap();

    for p in 0..8 {
        assert!((decomposed[p] - direct[p]).abs() < 1e-9);
    }
    assert!(DuPontEngine::reconcile(&table, DuPontVariant::FiveStep, 1e-9)
        .unwrap()
        .is_empty());
}

#[test]
fn test_five_step_factor_definitions() {
    let statements = retailer_statements(3);
    let table = DuPontEngine::five_step(&statements).unwrap();

    let net_income = statements.values(Metric::NetIncome).unwrap();
    let ebt = statements.values(Metric::Ebt).unwrap();
    let ebit = statements.values(Metric::Ebit).unwrap();
    let revenue = statements.values(Metric::Revenue).unwrap();

    let tax_burden = column_values(&table, DuPontEngine::TAX_BURDEN).unwrap();
    let interest_burden = column_values(&table, DuPontEngine::INTEREST_BURDEN).unwrap();
    let ebit_margin = column_values(&table, DuPontEngine::EBIT_MARGIN).unwrap();

    for p in 0..3 {
        assert_eq!(tax_burden[p], net_income[p] / ebt[p]);
        assert_eq!(interest_burden[p], ebt[p] / ebit[p]);
        assert_eq!(ebit_margin[p], ebit[p] / revenue[p]);
    }
}

#[test]
fn test_two_period_scenario() {
    let statements = statements_with(
        2,
        &[
            (Metric::Revenue, vec![100.0, 200.0]),
            (Metric::NetIncome, vec![10.0, 30.0]),
            (Metric::TotalAssets, vec![50.0, 80.0]),
            (Metric::TotalEquity, vec![20.0, 40.0]),
        ],
    );
    let table = DuPontEngine::three_step(&statements).unwrap();

    let column = |name: &str| column_values(&table, name).unwrap();
    let expected = [
        (DuPontEngine::NET_PROFIT_MARGIN, [0.10, 0.15]),
        (DuPontEngine::ASSET_TURNOVER, [2.0, 2.5]),
        (DuPontEngine::EQUITY_MULTIPLIER, [2.5, 2.0]),
        (DuPontEngine::ROE_THREE_STEP, [0.50, 0.75]),
        (DuPontEngine::ROE_DIRECT, [0.50, 0.75]),
        (DuPontEngine::DIFFERENCE, [0.0, 0.0]),
    ];
    for (name, values) in expected {
        let actual = column(name);
        assert_close(actual[0], values[0], 1e-12);
        assert_close(actual[1], values[1], 1e-12);
    }
}

#[test]
fn test_zero_equity_marks_only_that_period() {
    let statements = statements_with(3, &[(Metric::TotalEquity, vec![400.0, 0.0, 500.0])]);
    let analysis = DuPontEngine::analyze(&statements).unwrap();

    for variant in [DuPontVariant::ThreeStep, DuPontVariant::FiveStep] {
        let table = analysis.table(variant);
        let direct = column_values(table, DuPontEngine::ROE_DIRECT).unwrap();
        let multiplier = column_values(table, DuPontEngine::EQUITY_MULTIPLIER).unwrap();
        let difference = column_values(table, DuPontEngine::DIFFERENCE).unwrap();

        assert!(direct[1].is_nan());
        assert!(multiplier[1].is_nan());
        assert!(difference[1].is_nan());
        assert!(direct[0].is_finite() && direct[2].is_finite());
        assert!(difference[0].abs() < 1e-9 && difference[2].abs() < 1e-9);
    }

    // undefined periods are not reconciliation failures
    assert!(analysis.discrepancies(1e-9).unwrap().is_empty());
}

#[test]
fn test_reconcile_reports_tampered_period() {
    let statements = retailer_statements(4);
    let mut table = DuPontEngine::three_step(&statements).unwrap();

    let mut difference = column_values(&table, DuPontEngine::DIFFERENCE).unwrap();
    difference[2] = 0.01;
    table
        .with_column(Column::new(DuPontEngine::DIFFERENCE.into(), difference))
        .unwrap();

    let found = DuPontEngine::reconcile(&table, DuPontVariant::ThreeStep, 1e-9).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].period, "Year 3");
    assert_eq!(found[0].variant, DuPontVariant::ThreeStep);
    assert_close(found[0].difference, 0.01, 1e-15);
}

#[test]
fn test_breakdown_ends_with_identity() {
    for variant in [DuPontVariant::ThreeStep, DuPontVariant::FiveStep] {
        let breakdown = variant.breakdown();
        assert_eq!(breakdown.len(), variant.factors().len() + 1);
        assert!(breakdown.last().unwrap().starts_with("ROE = "));
    }
}
