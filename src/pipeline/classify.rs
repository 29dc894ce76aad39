//! Line classification: decide which construct a single Gemini line is.
//!
//! Classification looks only at the leading characters of the line and the
//! first matching rule wins:
//!
//! | Leading token | Kind |
//! |---------------|------|
//! | `=>` | [`LineKind::Link`] |
//! | `#`  | [`LineKind::Heading`] (level is not distinguished) |
//! | `*`  | [`LineKind::ListItem`] |
//! | `>`  | [`LineKind::Quote`] |
//! | anything visible | [`LineKind::Paragraph`] |
//! | nothing / whitespace | [`LineKind::Blank`] |
//!
//! Fence delimiters (```` ``` ````) are checked separately by the caller with
//! [`is_fence_delimiter`] before classification, because they are dropped
//! rather than rendered.

/// The construct a line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Link,
    Heading,
    ListItem,
    Quote,
    Paragraph,
    Blank,
}

/// Classify one line (without its terminator).
pub fn classify(line: &str) -> LineKind {
    if line.starts_with("=>") {
        LineKind::Link
    } else if line.starts_with('#') {
        LineKind::Heading
    } else if line.starts_with('*') {
        LineKind::ListItem
    } else if line.starts_with('>') {
        LineKind::Quote
    } else if !line.trim().is_empty() {
        LineKind::Paragraph
    } else {
        LineKind::Blank
    }
}

/// `true` for a ```` ``` ```` fence delimiter line (with or without alt text).
pub fn is_fence_delimiter(line: &str) -> bool {
    line.starts_with("```")
}
