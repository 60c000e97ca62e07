//! Error types for wordlist generation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code when the charset or output cannot be opened
pub const EXIT_OPEN_FAILURE: i32 = 1;
/// Exit code when the operator interrupts generation
pub const EXIT_INTERRUPTED: i32 = 2;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("Cannot open charset file {path:?}")]
    OpenCharset {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot open output file {path:?}")]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unknown charset encoding: '{0}'")]
    UnknownEncoding(String),

    #[error("Invalid size format: '{0}'")]
    InvalidSize(String),

    #[error("User interrupted with ^C")]
    Interrupted,

    #[error("I/O error")]
    Io(#[from] io::Error),
}

impl GenError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => EXIT_INTERRUPTED,
            _ => EXIT_OPEN_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let open = GenError::OpenCharset {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(open.exit_code(), EXIT_OPEN_FAILURE);
        assert_eq!(GenError::Interrupted.exit_code(), EXIT_INTERRUPTED);
        assert_eq!(GenError::UnknownEncoding("nope".into()).exit_code(), EXIT_OPEN_FAILURE);
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = GenError::OpenOutput {
            path: PathBuf::from("/root/out.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out.txt"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("denied".to_string()));
    }
}
