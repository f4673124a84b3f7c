use agenda_index::Database;
use agenda_types::{AgendaRecord, LookupColumn};

use crate::Result;

/// Find rows by one column and bring back the sub-sessions of matched
/// sessions.
///
/// Results are every direct match first, then the `Sub` children of each
/// matched `Session`, grouped in the order their sessions matched. A
/// `speakers` lookup returns direct matches only.
pub fn lookup(db: &Database, column: LookupColumn, value: &str) -> Result<Vec<AgendaRecord>> {
    let mut results = db.find_by_column(column, value)?;
    let direct = results.len();

    if column.expands_sub_sessions() {
        let mut sub_sessions = Vec::new();
        for session in results.iter().filter(|r| r.is_session()) {
            sub_sessions.extend(db.sub_sessions_of(session.id)?);
        }
        results.extend(sub_sessions);
    }

    tracing::debug!(
        %column,
        value,
        direct,
        expanded = results.len() - direct,
        "lookup finished"
    );

    Ok(results)
}
