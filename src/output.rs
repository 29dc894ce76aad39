//! Conversion result types.

use serde::Serialize;

/// The rendered document plus per-run counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionOutput {
    /// Rendered text; every logical input line ends with `\n`.
    pub text: String,
    pub stats: ConversionStats,
}

/// Counters collected while converting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Lines in the input, counting the empty piece after a trailing newline.
    pub input_lines: usize,
    /// Physical lines in the rendered text.
    pub output_lines: usize,
    pub headings: usize,
    pub list_items: usize,
    pub quotes: usize,
    pub paragraphs: usize,
    pub blank_lines: usize,
    pub links: usize,
    /// `=>` lines with no target, passed through unchanged.
    pub malformed_links: usize,
    /// ```` ``` ```` lines dropped from the output.
    pub fence_delimiters: usize,
    /// Lines emitted verbatim under [`crate::config::FencePolicy::Preserve`].
    pub preserved_lines: usize,
}
