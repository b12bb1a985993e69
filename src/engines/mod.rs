pub mod ratios;
pub mod dupont;
pub mod summary;

pub use ratios::{RatioEngine, RatioTables};
pub use dupont::{Discrepancy, DuPontAnalysis, DuPontEngine, DuPontVariant};
pub use summary::{FinancialSummary, MarginTrend, RoeTrend, SummaryReporter};
