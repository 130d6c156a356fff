//! Error types
//!
//! `LookupError` is the two-kind taxonomy of the static asset responder.
//! `ServerError` covers startup failures (configuration, address, bind).

use hyper::StatusCode;
use std::io;
use thiserror::Error;

/// Failure while resolving or opening a requested asset
#[derive(Debug, Error)]
pub enum LookupError {
    /// The resolved path does not exist
    #[error("file not found")]
    NotFound,
    /// Any other filesystem failure (permissions, I/O, not a regular file)
    #[error("filesystem error: {0}")]
    Other(#[source] io::Error),
}

impl LookupError {
    /// HTTP status reported to the client for this failure
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<io::Error> for LookupError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::Other(err),
        }
    }
}

/// Startup and runtime errors of the server process
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kind_maps_to_404() {
        let err = LookupError::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_kinds_map_to_500() {
        for kind in [
            io::ErrorKind::PermissionDenied,
            io::ErrorKind::InvalidInput,
            io::ErrorKind::Other,
        ] {
            let err = LookupError::from(io::Error::from(kind));
            assert!(!err.is_not_found());
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
