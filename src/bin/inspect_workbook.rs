//! Print every sheet of a workbook with the rows that look like statement lines.
//!
//! Usage: `inspect_workbook [WORKBOOK]`; defaults to the configured workbook.

use anyhow::Context;
use dupont_analysis::config::{AppConfig, DEFAULT_CONFIG_FILE};
use dupont_analysis::data::WorkbookConnector;
use dupont_analysis::report::ConsoleReporter;
use std::path::PathBuf;

const PREVIEW_ROWS: usize = 10;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => AppConfig::load_or_default(DEFAULT_CONFIG_FILE)?.workbook.path,
    };

    let previews = WorkbookConnector::inspect(&path, PREVIEW_ROWS)
        .with_context(|| format!("Failed to inspect '{}'", path.display()))?;

    println!("{}", ConsoleReporter::banner("EXCEL SHEET ANALYSIS"));
    for preview in &previews {
        println!("\n--- SHEET: {} ---", preview.name);
        if preview.is_empty() {
            println!("Sheet appears to be empty");
            continue;
        }

        if let Some(((r0, c0), (r1, c1))) = preview.used_range {
            println!("Used range: rows {}..={}, columns {}..={}", r0, r1, c0, c1);
        }
        println!("Non-empty cells: {}", preview.non_empty_cells);

        println!("Non-empty data preview:");
        for row in &preview.first_rows {
            println!("  {}", row.join(" | "));
        }

        for found in &preview.keyword_rows {
            println!("Found potential financial data at row {}: {}", found.row, found.text);
        }
    }

    Ok(())
}
