use agenda_types::AgendaFields;
use std::path::Path;

use crate::{AGENDA_COLUMNS, Result};

/// Read a CSV export of the agenda sheet.
///
/// Records may have any length; short ones are padded with empty cells.
/// The csv reader drops fully empty lines, so the header offset counts
/// records rather than physical lines.
pub(crate) fn read_csv(path: &Path, header_rows: usize) -> Result<Vec<AgendaFields>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records().skip(header_rows) {
        let record = record?;
        rows.push(AgendaFields::from_cells(
            record.iter().take(AGENDA_COLUMNS as usize),
        ));
    }

    Ok(rows)
}
