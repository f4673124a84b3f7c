// Spreadsheet input
// Reads the first sheet of an agenda workbook (or a CSV export of it) into
// named rows. No validation happens here: every cell passes through as text.

mod csv_reader;
mod error;
mod workbook;

pub use error::{Error, Result};

use agenda_types::AgendaFields;
use std::path::Path;

/// Rows above the agenda data (event title block and column headers).
pub const DEFAULT_HEADER_ROWS: usize = 16;

/// Number of sheet columns mapped onto [`AgendaFields`].
pub const AGENDA_COLUMNS: u32 = 8;

/// Workbook extensions handed to calamine, lowercase.
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm", "xlsb", "xla", "xlam", "ods"];

pub const CSV_EXTENSION: &str = "csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Excel or OpenDocument workbook, decoded by calamine
    Workbook,
    /// Comma-separated export of the agenda sheet
    Csv,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
            Ok(SheetFormat::Workbook)
        } else if ext == CSV_EXTENSION {
            Ok(SheetFormat::Csv)
        } else {
            Err(Error::UnsupportedFormat(path.display().to_string()))
        }
    }
}

/// Read agenda rows from `path`, skipping the first `header_rows` rows.
///
/// Rows come back in sheet order. Blank rows inside the data region are kept
/// (they read as rows with an empty session type).
pub fn read_agenda_rows(path: &Path, header_rows: usize) -> Result<Vec<AgendaFields>> {
    let format = SheetFormat::from_path(path)?;

    let rows = match format {
        SheetFormat::Workbook => workbook::read_first_sheet(path, header_rows)?,
        SheetFormat::Csv => csv_reader::read_csv(path, header_rows)?,
    };

    tracing::debug!(
        path = %path.display(),
        ?format,
        header_rows,
        rows = rows.len(),
        "read agenda rows"
    );

    Ok(rows)
}
