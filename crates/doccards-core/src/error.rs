//! Error types for doccards

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading card configuration.
///
/// Rendering itself never fails; only the configuration layer touches I/O.
#[derive(Error, Debug)]
pub enum CardError {
    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for the expected shape
    #[error("Invalid link configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for doccards operations
pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = CardError::Io {
            path: PathBuf::from("/tmp/links.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/links.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CardError = parse_err.into();
        assert!(err.to_string().starts_with("Invalid link configuration"));
    }
}
