use std::fmt;
use std::path::PathBuf;

/// Result type for agenda-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the storage layer
#[derive(Debug)]
pub enum Error {
    /// Database operation failed
    Database(rusqlite::Error),

    /// Database file does not exist (lookups never create one)
    NotFound(PathBuf),

    /// Query-specific error (invalid input, wrong arity, etc.)
    Query(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => {
                let msg = err.to_string();
                // A lookup against a database that was never imported into
                if msg.contains("no such table") {
                    write!(
                        f,
                        "Database has no agenda table: {}. Run import_agenda first.",
                        msg
                    )
                } else {
                    write!(f, "Database error: {}", err)
                }
            }
            Error::NotFound(path) => write!(
                f,
                "Database not found: {}. Run import_agenda first.",
                path.display()
            ),
            Error::Query(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::NotFound(_) | Error::Query(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}
