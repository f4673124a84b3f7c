use agenda_types::AgendaFields;
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;

use crate::{AGENDA_COLUMNS, Error, Result};

/// Read the first worksheet of a workbook.
///
/// calamine trims leading empty rows and columns from a range, so rows are
/// addressed by absolute sheet position to keep the header offset stable.
pub(crate) fn read_first_sheet(path: &Path, header_rows: usize) -> Result<Vec<AgendaFields>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or(Error::NoSheet)??;

    Ok(rows_from_range(&range, header_rows))
}

fn rows_from_range(range: &Range<Data>, header_rows: usize) -> Vec<AgendaFields> {
    let Some(end) = range.end() else {
        return Vec::new();
    };

    let first = u32::try_from(header_rows).unwrap_or(u32::MAX);
    if first > end.0 {
        return Vec::new();
    }

    (first..=end.0)
        .map(|row| {
            AgendaFields::from_cells((0..AGENDA_COLUMNS).map(|col| {
                range
                    .get_value((row, col))
                    .map(cell_text)
                    .unwrap_or_default()
            }))
        })
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}
