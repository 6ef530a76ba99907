use std::fmt;

/// Result type for gastrack-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Entry store error
    Store(gastrack_store::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// User input rejected before reaching the store
    Validation(String),

    /// No entry matches the given id
    NotFound(String),

    /// An id prefix matches more than one entry
    Ambiguous(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Validation(msg) => write!(f, "Invalid entry: {}", msg),
            Error::NotFound(id) => write!(f, "No entry found with id '{}'", id),
            Error::Ambiguous(id) => {
                write!(f, "Id prefix '{}' matches more than one entry", id)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::Validation(_) | Error::NotFound(_) | Error::Ambiguous(_) => {
                None
            }
        }
    }
}

impl From<gastrack_store::Error> for Error {
    fn from(err: gastrack_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
