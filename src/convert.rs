//! Conversion entry points.
//!
//! [`convert`] is the core: a pure function from document text and a
//! [`ConversionConfig`] to rendered text. It cannot fail. [`convert_file`]
//! and [`convert_to_file`] wrap it with the file I/O a caller usually wants.

use crate::config::{ConversionConfig, FencePolicy};
use crate::error::Gmi2GopherError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::classify::{is_fence_delimiter, LineKind};
use crate::pipeline::input;
use crate::pipeline::render::{RenderedLine, Renderer};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert Gemini text to the configured dialect.
///
/// Lines are split on `\n` with an optional preceding `\r`. Every rendered
/// line is followed by `\n`, so input that ends with a newline produces a
/// trailing empty line, and input order is preserved.
///
/// # Example
/// ```rust
/// use gmi2gopher::{convert, ConversionConfig};
///
/// let out = convert("=> https://example.com Example", &ConversionConfig::default());
/// assert_eq!(out.text, "hExample\tURL:https://example.com\n");
/// ```
pub fn convert(text: &str, config: &ConversionConfig) -> ConversionOutput {
    let start = Instant::now();
    let renderer = Renderer::new(config);
    let mut stats = ConversionStats::default();
    let mut doc = String::with_capacity(text.len() + text.len() / 4);
    let mut in_fence = false;

    for line in split_lines(text) {
        stats.input_lines += 1;

        if is_fence_delimiter(line) {
            stats.fence_delimiters += 1;
            if config.fence_policy == FencePolicy::Preserve {
                in_fence = !in_fence;
                debug!(line = stats.input_lines, open = in_fence, "fence delimiter");
            }
            continue;
        }

        if in_fence {
            stats.preserved_lines += 1;
            doc.push_str(&renderer.verbatim(line));
        } else {
            let rendered = renderer.render_line(line);
            record(&mut stats, &rendered);
            doc.push_str(&rendered.text);
        }
        doc.push('\n');
    }

    stats.output_lines = doc.matches('\n').count();

    info!(
        "Converted {} lines into {} ({} links) in {}µs",
        stats.input_lines,
        stats.output_lines,
        stats.links,
        start.elapsed().as_micros()
    );

    ConversionOutput { text: doc, stats }
}

/// Read a Gemini file and convert it.
pub fn convert_file(
    path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Gmi2GopherError> {
    let path = path.as_ref();
    info!("Starting conversion: {}", path.display());
    let text = input::read_document(path)?;
    Ok(convert(&text, config))
}

/// Convert a Gemini file and write the result to `output_path`.
///
/// Uses atomic write (temp file in the destination directory + rename) so a
/// failed run never leaves a partial file behind.
pub fn convert_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Gmi2GopherError> {
    let output = convert_file(input_path, config)?;
    let path = output_path.as_ref();
    let write_err = |source| Gmi2GopherError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(output.text.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!("Wrote {}", path.display());
    Ok(output.stats)
}

// ── Internal helpers ─────────────────────────────────────────────────────

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn record(stats: &mut ConversionStats, rendered: &RenderedLine) {
    match rendered.kind {
        LineKind::Link if rendered.malformed_link => stats.malformed_links += 1,
        LineKind::Link => stats.links += 1,
        LineKind::Heading => stats.headings += 1,
        LineKind::ListItem => stats.list_items += 1,
        LineKind::Quote => stats.quotes += 1,
        LineKind::Paragraph => stats.paragraphs += 1,
        LineKind::Blank => stats.blank_lines += 1,
    }
}
