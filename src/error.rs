//! Error types for lantern.

use std::fmt;
use std::io;

/// Result type alias for lantern operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for lantern operations.
///
/// Nothing in the draw path returns an error; rendering degrades locally
/// (see the image module). Errors surface only where the caller can react:
/// parsing a result stream, parsing theme colors, and validating settings.
#[derive(Debug)]
pub enum Error {
    /// I/O error from reading a result stream or probing an image file.
    Io(io::Error),
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Settings that cannot produce a drawable window.
    InvalidSettings(String),
    /// Malformed `{text|action|desc}` result stream.
    ResultSyntax { index: usize, found: char },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidSettings(s) => write!(f, "invalid settings: {s}"),
            Self::ResultSyntax { index, found } => {
                write!(
                    f,
                    "syntax error in result stream: found {found:?} at byte {index}"
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidColor("not-a-color".to_string());
        assert!(err.to_string().contains("invalid color format"));

        let err = Error::InvalidSettings("row height must be nonzero".to_string());
        assert!(err.to_string().contains("row height"));

        let err = Error::ResultSyntax {
            index: 7,
            found: '}',
        };
        assert!(err.to_string().contains("byte 7"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
