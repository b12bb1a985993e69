use calamine::{Data, Range};
use serde::{Deserialize, Serialize};

/// Words that mark a row as part of a financial statement
pub const FINANCIAL_KEYWORDS: [&str; 9] = [
    "revenue",
    "sales",
    "income",
    "expense",
    "assets",
    "liabilities",
    "equity",
    "cash",
    "year",
];

/// Overview of one worksheet, used to find a statement layout by eye
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetPreview {
    pub name: String,
    /// Absolute (row, column) of the first and last used cell
    pub used_range: Option<((u32, u32), (u32, u32))>,
    pub non_empty_cells: usize,
    pub first_rows: Vec<Vec<String>>,
    pub keyword_rows: Vec<KeywordRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRow {
    pub row: u32,
    pub text: String,
}

impl SheetPreview {
    pub fn from_range(name: &str, range: &Range<Data>, preview_rows: usize) -> Self {
        let used_range = range.start().zip(range.end());
        let start_row = range.start().map(|(r, _)| r).unwrap_or(0);

        let non_empty_cells = range.used_cells().filter(|(_, _, c)| !is_blank(c)).count();

        let first_rows = range
            .rows()
            .filter(|row| row.iter().any(|c| !is_blank(c)))
            .take(preview_rows)
            .map(|row| row.iter().map(cell_text).collect())
            .collect();

        let keyword_rows = range
            .rows()
            .enumerate()
            .filter_map(|(offset, row)| {
                let text = row
                    .iter()
                    .filter(|c| !is_blank(c))
                    .map(cell_text)
                    .collect::<Vec<_>>()
                    .join(" ");
                let lower = text.to_lowercase();
                FINANCIAL_KEYWORDS
                    .iter()
                    .any(|k| lower.contains(k))
                    .then(|| KeywordRow {
                        row: start_row + offset as u32,
                        text,
                    })
            })
            .collect();

        Self {
            name: name.to_string(),
            used_range,
            non_empty_cells,
            first_rows,
            keyword_rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.non_empty_cells == 0
    }
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
