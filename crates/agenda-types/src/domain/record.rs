use serde::{Deserialize, Serialize};

use super::entry::AgendaFields;

/// A persisted agenda row.
///
/// Hierarchy is kept only through `parent_id`; rebuilding a session's
/// children requires a second query on that column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaRecord {
    /// Storage-assigned row id.
    pub id: i64,
    #[serde(flatten)]
    pub fields: AgendaFields,
    /// Id of the owning session, `None` for top-level sessions.
    pub parent_id: Option<i64>,
}

impl AgendaRecord {
    pub fn is_session(&self) -> bool {
        self.fields.session_type.is_session()
    }
}
