//! Error types for the gmi2gopher library.
//!
//! Conversion of an in-memory document never fails: every line has a
//! rendering, malformed links pass through, unknown extensions fall back to
//! the binary type. The only fatal errors come from the edges of the
//! library, reading the input file, writing the output file, and rejecting
//! an invalid [`crate::config::ConversionConfig`].

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the gmi2gopher library.
#[derive(Debug, Error)]
pub enum Gmi2GopherError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Gemini file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file was read but its bytes are not valid UTF-8.
    #[error("File '{path}' is not valid UTF-8 text")]
    InvalidUtf8 { path: PathBuf },

    /// Any other I/O failure while reading the input.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = Gmi2GopherError::FileNotFound {
            path: PathBuf::from("capsule/index.gmi"),
        };
        let msg = e.to_string();
        assert!(msg.contains("capsule/index.gmi"), "got: {msg}");
    }

    #[test]
    fn output_write_failed_keeps_source() {
        use std::error::Error as _;

        let e = Gmi2GopherError::OutputWriteFailed {
            path: PathBuf::from("/readonly/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("/readonly/out.txt"));
        assert!(e.source().is_some());
    }

    #[test]
    fn invalid_config_display() {
        let e = Gmi2GopherError::InvalidConfig("width must be 20–1000, got 5".into());
        assert!(e.to_string().starts_with("Invalid configuration"));
        assert!(e.to_string().contains("got 5"));
    }
}
