use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Columns a lookup may filter on.
///
/// `session_type`, `id` and `parent_id` cannot be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupColumn {
    Date,
    TimeStart,
    TimeEnd,
    SessionTitle,
    Location,
    Description,
    Speakers,
}

impl LookupColumn {
    pub const ALL: [LookupColumn; 7] = [
        LookupColumn::Date,
        LookupColumn::TimeStart,
        LookupColumn::TimeEnd,
        LookupColumn::SessionTitle,
        LookupColumn::Location,
        LookupColumn::Description,
        LookupColumn::Speakers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LookupColumn::Date => "date",
            LookupColumn::TimeStart => "time_start",
            LookupColumn::TimeEnd => "time_end",
            LookupColumn::SessionTitle => "session_title",
            LookupColumn::Location => "location",
            LookupColumn::Description => "description",
            LookupColumn::Speakers => "speakers",
        }
    }

    /// Comma-separated list of valid names, for error and help text.
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether matched sessions should be expanded with their sub-sessions.
    pub fn expands_sub_sessions(self) -> bool {
        self != LookupColumn::Speakers
    }
}

impl fmt::Display for LookupColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupColumn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::InvalidColumn(s.to_string()))
    }
}
