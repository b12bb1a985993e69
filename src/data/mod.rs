pub mod connectors;
pub mod normalizer;
pub mod statements;

pub use connectors::{LayoutValidator, SheetPreview, WorkbookConnector};
pub use normalizer::StatementNormalizer;
pub use statements::{column_values, period_labels, FinancialStatements};
