use std::fmt;

/// Result type for agenda-sheet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading a spreadsheet
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Workbook could not be opened or decoded
    Workbook(calamine::Error),

    /// CSV decoding failed
    Csv(csv::Error),

    /// File extension is not a supported spreadsheet format
    UnsupportedFormat(String),

    /// Workbook has no worksheet to read
    NoSheet,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Workbook(err) => write!(f, "Workbook error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::UnsupportedFormat(name) => {
                write!(f, "Unsupported spreadsheet format: {} (expected ", name)?;
                for ext in crate::WORKBOOK_EXTENSIONS {
                    write!(f, ".{}, ", ext)?;
                }
                write!(f, "or .{})", crate::CSV_EXTENSION)
            }
            Error::NoSheet => write!(f, "Workbook contains no worksheets"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Workbook(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::UnsupportedFormat(_) | Error::NoSheet => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Workbook(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
