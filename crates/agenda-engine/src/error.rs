use std::fmt;

/// Result type for agenda-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Storage operation failed outside an import
    Index(agenda_index::Error),

    /// An insert failed partway through an import
    Import {
        /// Rows still in the table after the failure (0 once rolled back)
        persisted: usize,
        source: agenda_index::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Index(err) => write!(f, "{}", err),
            Error::Import { persisted, source } => {
                write!(f, "{} ({} rows were written before the failure)", source, persisted)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Index(err) => Some(err),
            Error::Import { source, .. } => Some(source),
        }
    }
}

impl From<agenda_index::Error> for Error {
    fn from(err: agenda_index::Error) -> Self {
        Error::Index(err)
    }
}
