use agenda_index::{AgendaWriter, Database};
use agenda_types::AgendaEntry;
use std::fmt;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Every insert commits on its own; a failure keeps earlier rows.
    #[default]
    Incremental,
    /// All inserts share one transaction; a failure leaves the table untouched.
    Atomic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub sessions: usize,
    pub sub_sessions: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.sessions + self.sub_sessions
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sessions, {} sub-sessions ({} rows)",
            self.sessions,
            self.sub_sessions,
            self.total()
        )
    }
}

/// Persist a session forest.
///
/// Each session is inserted with no parent, then its sub-sessions in sheet
/// order with `parent_id` set to the id the session just received.
pub fn write_forest<W>(writer: &W, forest: &[AgendaEntry]) -> Result<ImportSummary>
where
    W: AgendaWriter + ?Sized,
{
    let mut summary = ImportSummary::default();
    let fail = |summary: &ImportSummary, source| Error::Import {
        persisted: summary.total(),
        source,
    };

    for session in forest {
        let session_id = writer
            .insert_agenda(&session.fields, None)
            .map_err(|e| fail(&summary, e))?;
        summary.sessions += 1;

        for sub_session in &session.sub_sessions {
            let sub_id = writer
                .insert_agenda(&sub_session.fields, Some(session_id))
                .map_err(|e| fail(&summary, e))?;
            summary.sub_sessions += 1;

            tracing::trace!(session_id, sub_id, "inserted sub-session");
        }

        tracing::debug!(
            session_id,
            session_title = %session.fields.session_title,
            sub_sessions = session.sub_sessions.len(),
            "inserted session"
        );
    }

    Ok(summary)
}

/// Write the forest into `db` using the requested mode.
pub fn import_forest(
    db: &mut Database,
    forest: &[AgendaEntry],
    mode: ImportMode,
) -> Result<ImportSummary> {
    let summary = match mode {
        ImportMode::Incremental => write_forest(&*db, forest)?,
        ImportMode::Atomic => {
            let batch = db.begin_import()?;
            match write_forest(&batch, forest) {
                Ok(summary) => {
                    batch.commit()?;
                    summary
                }
                Err(Error::Import { source, .. }) => {
                    if let Err(rollback_err) = batch.rollback() {
                        tracing::warn!(error = %rollback_err, "rollback after failed import also failed");
                    }
                    return Err(Error::Import {
                        persisted: 0,
                        source,
                    });
                }
                Err(other) => return Err(other),
            }
        }
    };

    tracing::info!(
        ?mode,
        sessions = summary.sessions,
        sub_sessions = summary.sub_sessions,
        "import finished"
    );

    Ok(summary)
}
