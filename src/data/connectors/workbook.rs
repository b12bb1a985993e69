use super::types::SheetPreview;
use crate::error::{AnalysisError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct WorkbookConnector;

impl WorkbookConnector {
    /// Open an xlsx/xls/ods workbook
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Sheets<BufReader<File>>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AnalysisError::WorkbookNotFound(path.to_path_buf()));
        }

        let workbook = open_workbook_auto(path)?;
        log::debug!(
            "Opened {} with sheets {:?}",
            path.display(),
            workbook.sheet_names()
        );

        Ok(workbook)
    }

    /// Load one worksheet as a cell grid.
    pub fn load_sheet<P: AsRef<Path>>(path: P, sheet: &str) -> Result<Range<Data>> {
        let mut workbook = Self::open(path)?;
        Self::sheet_range(&mut workbook, sheet)
    }

    pub fn sheet_range(workbook: &mut Sheets<BufReader<File>>, sheet: &str) -> Result<Range<Data>> {
        let available = workbook.sheet_names();
        if !available.iter().any(|name| name == sheet) {
            return Err(AnalysisError::SheetNotFound {
                sheet: sheet.to_string(),
                available,
            });
        }

        Ok(workbook.worksheet_range(sheet)?)
    }

    /// Preview every sheet of the workbook.
    ///
    /// Sheets that fail to load are logged and skipped.
    pub fn inspect<P: AsRef<Path>>(path: P, preview_rows: usize) -> Result<Vec<SheetPreview>> {
        let mut workbook = Self::open(path)?;
        let mut previews = Vec::new();

        for name in workbook.sheet_names() {
            match workbook.worksheet_range(&name) {
                Ok(range) => previews.push(SheetPreview::from_range(&name, &range, preview_rows)),
                Err(e) => log::warn!("Error reading sheet {}: {}", name, e),
            }
        }

        Ok(previews)
    }
}
