use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of agenda row, taken verbatim from the sheet's session type column.
///
/// Only the exact text `"Session"` opens a new top-level session. `"Sub"`
/// marks a sub-session; any other text is kept as-is and is attached to the
/// current session the same way a `Sub` row is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionType {
    Session,
    Sub,
    Other(String),
}

impl SessionType {
    pub const SESSION: &'static str = "Session";
    pub const SUB: &'static str = "Sub";

    pub fn parse(raw: &str) -> Self {
        Self::known(raw).unwrap_or_else(|| SessionType::Other(raw.to_string()))
    }

    /// The two reserved names; anything else is passthrough text.
    fn known(raw: &str) -> Option<Self> {
        match raw {
            Self::SESSION => Some(SessionType::Session),
            Self::SUB => Some(SessionType::Sub),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SessionType::Session => Self::SESSION,
            SessionType::Sub => Self::SUB,
            SessionType::Other(text) => text,
        }
    }

    pub fn is_session(&self) -> bool {
        matches!(self, SessionType::Session)
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SessionType {
    fn from(raw: String) -> Self {
        Self::known(&raw).unwrap_or_else(|| SessionType::Other(raw))
    }
}

impl From<&str> for SessionType {
    fn from(raw: &str) -> Self {
        SessionType::parse(raw)
    }
}

impl From<SessionType> for String {
    fn from(kind: SessionType) -> Self {
        match kind {
            SessionType::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

/// The eight text fields of one agenda row.
///
/// Values are opaque: dates and times are stored exactly as they appeared in
/// the sheet, with no validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaFields {
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    pub session_type: SessionType,
    pub session_title: String,
    pub location: String,
    pub description: String,
    pub speakers: String,
}

impl AgendaFields {
    /// Build fields from the first eight cells of a row, in sheet column order.
    /// Missing cells are treated as empty.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells = cells.into_iter().map(Into::into);
        let mut next = || cells.next().unwrap_or_default();

        let date = next();
        let time_start = next();
        let time_end = next();
        let session_type = SessionType::from(next());
        let session_title = next();
        let location = next();
        let description = next();
        let speakers = next();

        Self {
            date,
            time_start,
            time_end,
            session_type,
            session_title,
            location,
            description,
            speakers,
        }
    }
}

/// One node of the in-memory agenda tree.
///
/// Only entries whose type is [`SessionType::Session`] carry sub-sessions;
/// children never have children of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaEntry {
    #[serde(flatten)]
    pub fields: AgendaFields,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_sessions: Vec<AgendaEntry>,
}

impl AgendaEntry {
    pub fn new(fields: AgendaFields) -> Self {
        Self {
            fields,
            sub_sessions: Vec::new(),
        }
    }

    pub fn is_session(&self) -> bool {
        self.fields.session_type.is_session()
    }

    pub fn add_sub_session(&mut self, sub_session: AgendaEntry) {
        self.sub_sessions.push(sub_session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_type_parse_is_exact() {
        assert_eq!(SessionType::parse("Session"), SessionType::Session);
        assert_eq!(SessionType::parse("Sub"), SessionType::Sub);
        assert_eq!(
            SessionType::parse("session"),
            SessionType::Other("session".to_string())
        );
        assert_eq!(
            SessionType::parse(" Session"),
            SessionType::Other(" Session".to_string())
        );
        assert_eq!(SessionType::parse(""), SessionType::Other(String::new()));
    }

    #[test]
    fn test_owned_and_borrowed_conversions_agree() {
        for raw in ["Session", "Sub", "session", "SUB", " Sub", "", "Workshop"] {
            assert_eq!(SessionType::from(raw.to_string()), SessionType::parse(raw));
            assert_eq!(SessionType::from(raw), SessionType::parse(raw));
        }
    }

    #[test]
    fn test_session_type_keeps_passthrough_text() {
        let kind = SessionType::from("Workshop".to_string());
        assert_eq!(kind.as_str(), "Workshop");
        assert_eq!(String::from(kind), "Workshop");
        assert!(!SessionType::Sub.is_session());
    }

    #[test]
    fn test_session_type_serializes_as_plain_string() {
        let json = serde_json::to_string(&SessionType::Sub).unwrap();
        assert_eq!(json, "\"Sub\"");

        let back: SessionType = serde_json::from_str("\"Panel\"").unwrap();
        assert_eq!(back, SessionType::Other("Panel".to_string()));
    }

    #[test]
    fn test_fields_from_short_row_pad_with_empty() {
        let fields = AgendaFields::from_cells(["06/16/2018", "09:00", "10:00", "Session"]);

        assert_eq!(fields.date, "06/16/2018");
        assert_eq!(fields.session_type, SessionType::Session);
        assert_eq!(fields.session_title, "");
        assert_eq!(fields.speakers, "");
    }

    #[test]
    fn test_fields_ignore_extra_cells() {
        let fields = AgendaFields::from_cells([
            "d", "s", "e", "Sub", "Title", "Room", "Desc", "Ann; Bob", "extra",
        ]);

        assert_eq!(fields.session_type, SessionType::Sub);
        assert_eq!(fields.speakers, "Ann; Bob");
    }
}
