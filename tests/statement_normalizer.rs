use calamine::{Data, Range};
use dupont_analysis::config::{LabelCheck, WorkbookConfig};
use dupont_analysis::data::{StatementNormalizer, WorkbookConnector};
use dupont_analysis::error::{AnalysisError, ErrorKind};
use dupont_analysis::types::Metric;

/// Sheet in the default retailer layout: labels in column B, eight periods in F..M.
fn retailer_sheet() -> Range<Data> {
    retailer_sheet_from((0, 0))
}

/// Same layout, with the used range starting at `start` as xlsx files often do.
fn retailer_sheet_from(start: (u32, u32)) -> Range<Data> {
    let config = WorkbookConfig::default();
    let mut range = Range::new(start, (103, 12));

    for (index, metric) in Metric::all().into_iter().enumerate() {
        let row = metric.default_row();
        range.set_value((row, 1), Data::String(metric.as_str().to_string()));
        for (offset, column) in config.periods.columns().enumerate() {
            let value = 100.0 * (index + 1) as f64 + offset as f64;
            range.set_value((row, column), Data::Float(value));
        }
    }

    range
}

fn normalizer(label_check: LabelCheck) -> StatementNormalizer {
    StatementNormalizer::new(WorkbookConfig {
        label_check,
        ..WorkbookConfig::default()
    })
}

#[test]
fn test_default_layout_normalizes_all_statements() {
    let statements = normalizer(LabelCheck::Strict).normalize(&retailer_sheet()).unwrap();

    assert_eq!(statements.period_count(), 8);
    assert_eq!(statements.periods()[0], "Year 1");
    assert_eq!(statements.periods()[7], "Year 8");

    let revenue = statements.values(Metric::Revenue).unwrap();
    assert_eq!(revenue, vec![100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0, 107.0]);

    let equity = statements.values(Metric::TotalEquity).unwrap();
    assert_eq!(equity[0], 2700.0);
}

#[test]
fn test_integer_cells_are_numeric() {
    let mut sheet = retailer_sheet();
    sheet.set_value((Metric::Cash.default_row(), 5), Data::Int(42));

    let statements = normalizer(LabelCheck::Off).normalize(&sheet).unwrap();
    assert_eq!(statements.values(Metric::Cash).unwrap()[0], 42.0);
}

#[test]
fn test_expenses_are_stored_as_magnitudes() {
    let mut sheet = retailer_sheet();
    let row = Metric::Cogs.default_row();
    sheet.set_value((row, 5), Data::Float(-600.0));
    sheet.set_value((row, 6), Data::Float(650.0));
    sheet.set_value((Metric::Taxes.default_row(), 5), Data::Float(-25.0));

    let statements = normalizer(LabelCheck::Off).normalize(&sheet).unwrap();

    let cogs = statements.values(Metric::Cogs).unwrap();
    assert_eq!(cogs[0], 600.0);
    assert_eq!(cogs[1], 650.0);
    // only configured expense lines are re-signed
    assert_eq!(statements.values(Metric::Taxes).unwrap()[0], -25.0);
}

#[test]
fn test_blank_and_error_cells_become_nan() {
    let mut sheet = retailer_sheet();
    let row = Metric::Inventory.default_row();
    sheet.set_value((row, 6), Data::Empty);
    sheet.set_value((row, 7), Data::Error(calamine::CellErrorType::Div0));

    let statements = normalizer(LabelCheck::Off).normalize(&sheet).unwrap();
    let inventory = statements.values(Metric::Inventory).unwrap();

    assert!(inventory[0].is_finite());
    assert!(inventory[1].is_nan());
    assert!(inventory[2].is_nan());
}

#[test]
fn test_text_cell_is_structural_error() {
    let mut sheet = retailer_sheet();
    let row = Metric::TotalAssets.default_row();
    sheet.set_value((row, 9), Data::String("n.a.".to_string()));

    let err = normalizer(LabelCheck::Off).normalize(&sheet).unwrap_err();

    match &err {
        AnalysisError::NonNumeric { metric, row: r, column, value } => {
            assert_eq!(metric, "Total Assets");
            assert_eq!(*r, row);
            assert_eq!(*column, 9);
            assert_eq!(value, "n.a.");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(err.is_terminal());
}

#[test]
fn test_header_row_supplies_period_labels() {
    let mut sheet = retailer_sheet();
    sheet.set_value((5, 5), Data::String("FY2015".to_string()));
    sheet.set_value((5, 6), Data::Float(2016.0));
    sheet.set_value((5, 7), Data::Int(2017));

    let mut config = WorkbookConfig::default();
    config.periods.header_row = Some(5);
    let statements = StatementNormalizer::new(config).normalize(&sheet).unwrap();

    assert_eq!(&statements.periods()[..4], &["FY2015", "2016", "2017", "Year 4"]);
}

#[test]
fn test_strict_mode_rejects_mislabelled_row() {
    let mut sheet = retailer_sheet();
    sheet.set_value((Metric::Ebit.default_row(), 1), Data::String("Operating Costs".to_string()));

    let err = normalizer(LabelCheck::Strict).normalize(&sheet).unwrap_err();
    assert!(matches!(err, AnalysisError::Layout(_)));

    // warn mode trusts the configured row
    assert!(normalizer(LabelCheck::Warn).normalize(&sheet).is_ok());
}

#[test]
fn test_detect_mode_follows_shifted_row() {
    let mut sheet = retailer_sheet();
    let configured = Metric::Revenue.default_row();
    let shifted = configured - 1;

    for column in 0..=12 {
        let cell = sheet.get_value((configured, column)).cloned().unwrap_or_default();
        sheet.set_value((shifted, column), cell);
        sheet.set_value((configured, column), Data::Empty);
    }
    sheet.set_value((shifted, 1), Data::String("Net Sales:".to_string()));

    let statements = normalizer(LabelCheck::Detect).normalize(&sheet).unwrap();
    assert_eq!(statements.values(Metric::Revenue).unwrap()[0], 100.0);
}

#[test]
fn test_used_range_below_a1_reads_absolute_cells() {
    let sheet = retailer_sheet_from((2, 1));
    assert_eq!(sheet.start(), Some((2, 1)));

    let statements = normalizer(LabelCheck::Strict).normalize(&sheet).unwrap();

    let revenue = statements.values(Metric::Revenue).unwrap();
    assert_eq!(revenue[0], 100.0);
    assert_eq!(revenue[7], 107.0);
    assert_eq!(statements.values(Metric::TotalLiabilitiesEquity).unwrap()[0], 2800.0);
}

#[test]
fn test_detect_mode_ignores_label_without_values() {
    let mut sheet = retailer_sheet();
    let configured = Metric::Ebit.default_row();
    sheet.set_value((configured, 1), Data::String("Operating Costs".to_string()));
    sheet.set_value((configured + 1, 1), Data::String("EBIT".to_string()));

    let err = normalizer(LabelCheck::Detect).normalize(&sheet).unwrap_err();
    assert!(matches!(err, AnalysisError::Layout(_)));
}

#[test]
fn test_period_columns_outside_sheet() {
    let mut config = WorkbookConfig::default();
    config.periods.count = 12;

    let err = StatementNormalizer::new(config).normalize(&retailer_sheet()).unwrap_err();
    assert!(matches!(err, AnalysisError::Layout(_)));
}

#[test]
fn test_unreadable_workbook_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.xlsx");
    std::fs::write(&path, b"not a workbook").unwrap();

    let err = WorkbookConnector::load_sheet(&path, "Financial Statements").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingResource);
}
