//! Gopher document type sniffing from a path's final segment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gopher item type attached to a link line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    /// `0`: plain text file.
    Text,
    /// `1`: directory / gophermap.
    Directory,
    /// `9`: binary file, downloaded rather than displayed.
    Binary,
    /// `h`: HTML document or `URL:` redirect.
    Html,
}

impl DocumentType {
    /// The single-character type code.
    pub fn code(self) -> char {
        match self {
            DocumentType::Text => '0',
            DocumentType::Directory => '1',
            DocumentType::Binary => '9',
            DocumentType::Html => 'h',
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Last `/`-separated segment of a path; the whole path if it has no `/`.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Extension of `filename` (text after the last `.`), if it has a dot at all.
pub fn extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

/// Sniff the document type of `filename`.
///
/// `internal` marks a site-relative link, where `.gmi` files are served as
/// their pre-rendered text and `index.gmi` stands for its directory. For
/// external gopher targets `.gmi` falls into the binary default.
pub fn sniff(filename: &str, internal: bool) -> DocumentType {
    let Some(ext) = extension(filename) else {
        return DocumentType::Directory;
    };
    match ext.to_lowercase().as_str() {
        "txt" => DocumentType::Text,
        "html" => DocumentType::Html,
        "gmi" if internal && filename == "index.gmi" => DocumentType::Directory,
        "gmi" if internal => DocumentType::Text,
        _ => DocumentType::Binary,
    }
}
