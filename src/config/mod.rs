pub mod traits;
pub mod workbook;
pub mod analysis;
pub mod report;
pub mod dashboard;
pub mod manager;

pub use manager::{AppConfig, DEFAULT_CONFIG_FILE};
pub use workbook::{LabelCheck, MetricLocator, PeriodLayout, WorkbookConfig};
pub use analysis::AnalysisConfig;
pub use report::ReportConfig;
pub use dashboard::DashboardConfig;
