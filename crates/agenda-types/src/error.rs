use std::fmt;

/// Result type for agenda-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Column name outside the lookup allow-list
    InvalidColumn(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColumn(name) => write!(
                f,
                "Invalid column name '{}'. Valid column choices: {}",
                name,
                crate::LookupColumn::choices()
            ),
        }
    }
}

impl std::error::Error for Error {}
