use anyhow::Context;
use dupont_analysis::config::{AppConfig, DEFAULT_CONFIG_FILE};
use dupont_analysis::report::ConsoleReporter;
use dupont_analysis::AnalysisPipeline;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = AppConfig::load_or_default(DEFAULT_CONFIG_FILE)
        .with_context(|| format!("Failed to load {}", DEFAULT_CONFIG_FILE))?;
    let workbook = config.workbook.path.clone();

    // still single-threaded here
    for (key, value) in ConsoleReporter::new(config.report.clone()).table_format_env() {
        std::env::set_var(key, value);
    }

    AnalysisPipeline::new(config)
        .run()
        .with_context(|| format!("Financial analysis of '{}' failed", workbook.display()))?;

    Ok(())
}
