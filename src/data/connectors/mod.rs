mod types;
mod validator;
mod workbook;

pub use types::{KeywordRow, SheetPreview, FINANCIAL_KEYWORDS};
pub use validator::LayoutValidator;
pub use workbook::WorkbookConnector;
