use crate::config::ReportConfig;
use crate::data::FinancialStatements;
use crate::engines::ratios::{EfficiencyRatios, ProfitabilityRatios};
use crate::engines::{DuPontAnalysis, DuPontVariant, FinancialSummary, RatioTables};
use crate::error::Result;
use crate::types::Statement;
use polars::prelude::*;
use std::fmt::Write as _;

const RULE_WIDTH: usize = 80;

/// Prints the analysis the way an analyst reads it: statements, ratio
/// tables, DuPont tables with their formulas, then the summary.
///
/// Every section is built as a `String` first so it can be checked without
/// capturing stdout.
pub struct ConsoleReporter {
    config: ReportConfig,
}

impl ConsoleReporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Polars display settings that keep ratio tables from being elided.
    ///
    /// Binaries export these before any worker threads exist.
    pub fn table_format_env(&self) -> Vec<(&'static str, String)> {
        vec![
            ("POLARS_FMT_MAX_COLS", self.config.max_table_columns.to_string()),
            ("POLARS_FMT_MAX_ROWS", "64".to_string()),
            ("POLARS_FMT_STR_LEN", "64".to_string()),
            ("POLARS_FMT_TABLE_HIDE_DATAFRAME_SHAPE", "1".to_string()),
            ("POLARS_FMT_TABLE_HIDE_COLUMN_DATA_TYPES", "1".to_string()),
        ]
    }

    pub fn banner(title: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        format!("{rule}\n{title}\n{rule}")
    }

    pub fn print_step(&self, step: usize, text: &str) {
        log::info!("Step {}: {}", step, text);
        println!("\nStep {}: {}...", step, text);
    }

    pub fn print_statements(&self, statements: &FinancialStatements) -> Result<()> {
        println!("{}", self.format_statements(statements)?);
        Ok(())
    }

    pub fn print_ratios(&self, ratios: &RatioTables) -> Result<()> {
        println!("{}", self.format_ratios(ratios)?);
        Ok(())
    }

    pub fn print_dupont(&self, dupont: &DuPontAnalysis, variant: DuPontVariant) -> Result<()> {
        println!("{}", self.format_dupont(dupont, variant)?);
        Ok(())
    }

    pub fn print_summary(&self, summary: &FinancialSummary) {
        println!("{}", self.format_summary(summary));
    }

    pub fn format_statements(&self, statements: &FinancialStatements) -> Result<String> {
        let mut out = Self::banner("EXTRACTING FINANCIAL STATEMENTS DATA");
        for statement in Statement::all() {
            let _ = write!(out, "\n{}:\n{}\n", statement.title(), statements.statement(statement));
        }
        Ok(out)
    }

    pub fn format_ratios(&self, ratios: &RatioTables) -> Result<String> {
        let mut out = Self::banner("CALCULATING FINANCIAL RATIOS");
        let sections = [
            ("Profitability Ratios", &ratios.profitability),
            ("Efficiency Ratios", &ratios.efficiency),
            ("Leverage Ratios", &ratios.leverage),
        ];
        for (title, table) in sections {
            let _ = write!(out, "\n{}:\n{}\n", title, self.rounded(table)?);
        }
        Ok(out)
    }

    pub fn format_dupont(&self, dupont: &DuPontAnalysis, variant: DuPontVariant) -> Result<String> {
        let mut out = Self::banner(&variant.title().to_uppercase());
        let _ = write!(
            out,
            "\n{}:\n{}\n\nBreakdown Components:",
            variant.title(),
            self.rounded(dupont.table(variant))?
        );
        for line in variant.breakdown() {
            let _ = write!(out, "\n{}", line);
        }
        Ok(out)
    }

    pub fn format_summary(&self, summary: &FinancialSummary) -> String {
        let years = summary.periods;
        let avg = |ratio: &str| summary.average(ratio).unwrap_or(f64::NAN);
        let latest = &summary.latest;

        let mut out = Self::banner("FINANCIAL ANALYSIS SUMMARY REPORT");
        let _ = write!(
            out,
            "\nGROWTH ANALYSIS:\n\
             • Revenue CAGR ({years} years): {}\n\
             • Net Income CAGR ({years} years): {}\n",
            percent(summary.revenue_cagr),
            percent(summary.net_income_cagr),
        );
        let _ = write!(
            out,
            "\nPROFITABILITY ANALYSIS ({years}-year averages):\n\
             • Average ROE: {}\n\
             • Average ROA: {}\n\
             • Average Gross Margin: {}\n\
             • Average Net Profit Margin: {}\n",
            percent(avg(ProfitabilityRatios::RETURN_ON_EQUITY)),
            percent(avg(ProfitabilityRatios::RETURN_ON_ASSETS)),
            percent(avg(ProfitabilityRatios::GROSS_MARGIN)),
            percent(avg(ProfitabilityRatios::NET_PROFIT_MARGIN)),
        );
        let _ = write!(
            out,
            "\nEFFICIENCY ANALYSIS:\n• Average Asset Turnover: {}\n",
            multiple(avg(EfficiencyRatios::ASSET_TURNOVER)),
        );
        let _ = write!(
            out,
            "\nDUPONT ANALYSIS INSIGHTS:\n\
             • Latest ROE ({}): {}\n\
             • Driven by: Net Margin ({}), Asset Turnover ({}), Equity Multiplier ({})\n",
            latest.period,
            percent(latest.roe),
            percent(latest.net_profit_margin),
            multiple(latest.asset_turnover),
            multiple(latest.equity_multiplier),
        );
        let _ = write!(
            out,
            "\nTREND ANALYSIS:\n\
             • ROE is {} over the period\n\
             • Net profit margins are {} over the period",
            summary.roe_trend, summary.margin_trend,
        );
        out
    }

    /// Write the summary as JSON when an export path is configured.
    pub fn export_summary(&self, summary: &FinancialSummary) -> Result<()> {
        if let Some(path) = &self.config.summary_json {
            let json = serde_json::to_string_pretty(summary)?;
            std::fs::write(path, json)?;
            log::info!("Summary written to {}", path.display());
        }
        Ok(())
    }

    /// Copy of `table` with every float rounded to the report precision
    pub fn rounded(&self, table: &DataFrame) -> Result<DataFrame> {
        let scale = 10f64.powi(self.config.precision as i32);
        let mut columns = Vec::with_capacity(table.width());

        for column in table.get_columns() {
            if column.dtype() == &DataType::Float64 {
                let values: Vec<Option<f64>> = column
                    .f64()?
                    .into_iter()
                    .map(|v| v.map(|v| (v * scale).round() / scale))
                    .collect();
                columns.push(Column::new(column.name().clone(), values));
            } else {
                columns.push(column.clone());
            }
        }

        Ok(DataFrame::new(columns)?)
    }
}

fn percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}%", value * 100.0)
    } else {
        "n/a".to_string()
    }
}

fn multiple(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}x", value)
    } else {
        "n/a".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::summary::{LatestDuPont, MarginTrend, RatioAverage, RoeTrend};
    use polars::df;

    fn summary() -> FinancialSummary {
        FinancialSummary {
            periods: 8,
            revenue_cagr: 0.1041,
            net_income_cagr: f64::NAN,
            profitability_averages: vec![RatioAverage {
                ratio: ProfitabilityRatios::RETURN_ON_EQUITY.to_string(),
                mean: 0.25,
            }],
            efficiency_averages: vec![RatioAverage {
                ratio: EfficiencyRatios::ASSET_TURNOVER.to_string(),
                mean: 2.5,
            }],
            latest: LatestDuPont {
                period: "Year 8".to_string(),
                roe: 0.3,
                net_profit_margin: 0.05,
                asset_turnover: 2.0,
                equity_multiplier: 3.0,
            },
            roe_trend: RoeTrend::Increasing,
            margin_trend: MarginTrend::Declining,
        }
    }

    #[test]
    fn test_summary_text() {
        let reporter = ConsoleReporter::new(ReportConfig::default());
        let text = reporter.format_summary(&summary());

        assert!(text.contains("• Revenue CAGR (8 years): 10.41%"));
        assert!(text.contains("• Net Income CAGR (8 years): n/a"));
        assert!(text.contains("• Average ROE: 25.00%"));
        assert!(text.contains("• Average ROA: n/a"));
        assert!(text.contains("• Average Asset Turnover: 2.50x"));
        assert!(text.contains("Equity Multiplier (3.00x)"));
        assert!(text.contains("ROE is increasing"));
        assert!(text.contains("margins are declining"));
    }

    #[test]
    fn test_rounding_keeps_nan_and_labels() {
        let table = df! {
            "Period" => &["Year 1", "Year 2"],
            "Ratio" => &[0.123456789, f64::NAN],
        }
        .unwrap();

        let reporter = ConsoleReporter::new(ReportConfig::default());
        let rounded = reporter.rounded(&table).unwrap();
        let values = rounded.column("Ratio").unwrap().f64().unwrap().clone();

        assert_eq!(values.get(0), Some(0.1235));
        assert!(values.get(1).unwrap().is_nan());
        assert_eq!(rounded.column("Period").unwrap().str().unwrap().get(0), Some("Year 1"));
    }

    #[test]
    fn test_table_format_follows_config() {
        let reporter = ConsoleReporter::new(ReportConfig {
            max_table_columns: 12,
            ..ReportConfig::default()
        });
        let env = reporter.table_format_env();

        assert!(env.contains(&("POLARS_FMT_MAX_COLS", "12".to_string())));
        assert!(env.iter().all(|(key, _)| key.starts_with("POLARS_FMT_")));
    }

    #[test]
    fn test_export_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let reporter = ConsoleReporter::new(ReportConfig {
            summary_json: Some(path.clone()),
            ..ReportConfig::default()
        });

        reporter.export_summary(&summary()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["roe_trend"], "increasing");
        assert!(json["net_income_cagr"].is_null());
        assert_eq!(json["latest"]["period"], "Year 8");
    }
}
