use agenda_types::{AgendaEntry, AgendaFields};

/// Session forest built from sheet rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    /// Top-level sessions in sheet order, each holding its sub-sessions.
    pub sessions: Vec<AgendaEntry>,
    /// Rows dropped because no session preceded them.
    pub orphans: usize,
}

impl Assembly {
    pub fn sub_session_count(&self) -> usize {
        self.sessions.iter().map(|s| s.sub_sessions.len()).sum()
    }
}

/// Fold flat sheet rows into sessions and sub-sessions.
///
/// A `Session` row opens a new top-level entry. Every other row belongs to
/// the most recent session (the last entry of the forest so far). Rows that
/// come before the first session have no owner and are dropped.
pub fn assemble<I>(rows: I) -> Assembly
where
    I: IntoIterator<Item = AgendaFields>,
{
    rows.into_iter()
        .fold(Assembly::default(), |mut acc, fields| {
            let entry = AgendaEntry::new(fields);

            if entry.is_session() {
                acc.sessions.push(entry);
            } else if let Some(current) = acc.sessions.last_mut() {
                current.add_sub_session(entry);
            } else {
                tracing::debug!(
                    session_title = %entry.fields.session_title,
                    session_type = %entry.fields.session_type,
                    "dropping row with no preceding session"
                );
                acc.orphans += 1;
            }

            acc
        })
}
