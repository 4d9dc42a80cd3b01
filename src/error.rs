//! Error and status types for termsurface.

use std::fmt;
use std::io;

/// Result type alias for termsurface operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for termsurface operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while presenting to the terminal.
    Io(io::Error),
    /// An allocation could not be satisfied.
    OutOfMemory { requested: usize },
    /// Grid or window dimension error (e.g., zero width/height).
    InvalidDimensions { width: i32, height: i32 },
    /// Fault reported by the editing engine while handling a message.
    Engine(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: could not reserve {requested} bytes")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
            Self::Engine(msg) => write!(f, "engine failure: {msg}"),
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

/// Status reported to the host after message dispatch.
///
/// Numeric values match the editing engine's status codes so hosts can pass
/// them through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    #[default]
    Ok = 0,
    /// Generic failure while handling a message.
    Failure = 1,
    /// Memory was exhausted while handling a message.
    BadAlloc = 2,
}

impl Status {
    /// Classify an error into the status the host sees.
    #[must_use]
    pub const fn from_error(err: &Error) -> Self {
        match err {
            Error::OutOfMemory { .. } => Self::BadAlloc,
            _ => Self::Failure,
        }
    }

    /// Raw status code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::OutOfMemory { requested: 64 };
        assert!(err.to_string().contains("64 bytes"));

        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("0x100"));

        let err = Error::Engine("bad message".to_string());
        assert!(err.to_string().contains("bad message"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_status_from_error() {
        assert_eq!(
            Status::from_error(&Error::OutOfMemory { requested: 1 }),
            Status::BadAlloc
        );
        assert_eq!(
            Status::from_error(&Error::Engine(String::new())),
            Status::Failure
        );
        let io_err = Error::Io(io::Error::other("x"));
        assert_eq!(Status::from_error(&io_err), Status::Failure);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Ok.code(), 0);
        assert_eq!(Status::Failure.code(), 1);
        assert_eq!(Status::BadAlloc.code(), 2);
        assert!(Status::default().is_ok());
    }
}
