//! Input resolution: read a Gemini document from disk.
//!
//! The converter itself only sees a `&str`. This stage turns a path into
//! that string and maps the ways reading can fail onto
//! [`Gmi2GopherError`] variants with useful messages.

use crate::error::Gmi2GopherError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read the document at `path` as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String, Gmi2GopherError> {
    if !path.exists() {
        return Err(Gmi2GopherError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => Gmi2GopherError::PermissionDenied {
            path: path.to_path_buf(),
        },
        ErrorKind::NotFound => Gmi2GopherError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Gmi2GopherError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let text = String::from_utf8(bytes).map_err(|_| Gmi2GopherError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
