use std::fmt;

/// Result type for gastrack-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A date string was neither `YYYY-MM-DD` nor an ISO timestamp
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate(input) => {
                write!(f, "Invalid date '{}': expected YYYY-MM-DD", input)
            }
        }
    }
}

impl std::error::Error for Error {}
