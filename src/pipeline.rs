use crate::config::AppConfig;
use crate::data::{FinancialStatements, StatementNormalizer};
use crate::engines::{
    Discrepancy, DuPontAnalysis, DuPontEngine, DuPontVariant, FinancialSummary, RatioEngine,
    RatioTables, SummaryReporter,
};
use crate::error::Result;
use crate::report::{ConsoleReporter, DashboardData, DashboardRenderer};

/// Everything derived from one set of statements
#[derive(Debug, Clone)]
pub struct Analysis {
    pub statements: FinancialStatements,
    pub ratios: RatioTables,
    pub dupont: DuPontAnalysis,
    pub summary: FinancialSummary,
    pub discrepancies: Vec<Discrepancy>,
}

impl Analysis {
    /// Pure computation: ratios, both DuPont variants, reconciliation and summary.
    pub fn compute(statements: FinancialStatements, tolerance: f64) -> Result<Self> {
        let ratios = RatioEngine::calculate_all(&statements)?;
        let dupont = DuPontEngine::analyze(&statements)?;
        let discrepancies = dupont.discrepancies(tolerance)?;
        let summary = SummaryReporter::summarize(&statements, &ratios, &dupont)?;

        Ok(Self {
            statements,
            ratios,
            dupont,
            summary,
            discrepancies,
        })
    }
}

/// load -> normalize -> ratios -> DuPont -> dashboard -> summary
pub struct AnalysisPipeline {
    config: AppConfig,
}

impl AnalysisPipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<Analysis> {
        let reporter = ConsoleReporter::new(self.config.report.clone());
        reporter.print_step(1, "Extracting financial data");
        let statements = StatementNormalizer::new(self.config.workbook.clone()).load()?;

        self.run_with(&reporter, statements)
    }

    /// Run every stage after loading on statements obtained elsewhere.
    pub fn run_with_statements(&self, statements: FinancialStatements) -> Result<Analysis> {
        let reporter = ConsoleReporter::new(self.config.report.clone());
        self.run_with(&reporter, statements)
    }

    fn run_with(&self, reporter: &ConsoleReporter, statements: FinancialStatements) -> Result<Analysis> {
        reporter.print_statements(&statements)?;

        let analysis = Analysis::compute(statements, self.config.analysis.reconciliation_tolerance)?;

        reporter.print_step(2, "Calculating financial ratios");
        reporter.print_ratios(&analysis.ratios)?;

        reporter.print_step(3, "Performing DuPont analysis");
        reporter.print_dupont(&analysis.dupont, DuPontVariant::ThreeStep)?;
        reporter.print_dupont(&analysis.dupont, DuPontVariant::FiveStep)?;
        for d in &analysis.discrepancies {
            log::warn!(
                "{} does not reconcile in {}: decomposed {} vs direct {} (difference {:e})",
                d.variant.title(),
                d.period,
                d.decomposed,
                d.direct,
                d.difference
            );
        }

        reporter.print_step(4, "Creating visualizations");
        self.render_dashboard(&analysis);

        reporter.print_step(5, "Generating summary report");
        reporter.print_summary(&analysis.summary);
        if let Err(e) = reporter.export_summary(&analysis.summary) {
            log::warn!("Could not export summary: {}", e);
        }

        println!("\n{}", ConsoleReporter::banner("ANALYSIS COMPLETE!"));
        Ok(analysis)
    }

    /// Rendering problems are reported and never abort the run.
    fn render_dashboard(&self, analysis: &Analysis) {
        if !self.config.dashboard.enabled {
            log::info!("Dashboard disabled");
            return;
        }

        let renderer = DashboardRenderer::new(self.config.dashboard.clone());
        let outcome = DashboardData::from_analysis(analysis).and_then(|data| renderer.render(&data));
        match outcome {
            Ok(path) => println!("Dashboard saved as '{}'", path.display()),
            Err(e) => {
                log::warn!("Error creating visualizations: {}", e);
                println!("Continuing without visualizations...");
            }
        }
    }
}
