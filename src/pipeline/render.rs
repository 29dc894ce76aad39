//! Rendering of text constructs: headings, list items, quotes, paragraphs.
//!
//! Every renderer takes the text prefix as an explicit argument instead of
//! reading it from shared state. A blockquote renders its body as a
//! paragraph with `"> "` appended to the prefix it was given, so nesting
//! composes with the dialect's own prefix and nothing needs restoring
//! afterwards.

use crate::config::ConversionConfig;
use crate::pipeline::classify::{classify, LineKind};
use crate::pipeline::link;
use crate::pipeline::wrap::wrap_text;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static RE_HEADING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+ ").unwrap());
static RE_LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\* ").unwrap());
static RE_QUOTE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^> *").unwrap());

const QUOTE_PREFIX: &str = "> ";
const LIST_CONTINUATION_INDENT: &str = "  ";

/// One input line after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub kind: LineKind,
    /// One or more physical lines joined with `\n`, without a trailing newline.
    pub text: String,
    /// `true` for a `=>` line with no target, passed through unchanged.
    pub malformed_link: bool,
}

/// Renders single Gemini lines according to a [`ConversionConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'c> {
    config: &'c ConversionConfig,
}

impl<'c> Renderer<'c> {
    pub fn new(config: &'c ConversionConfig) -> Self {
        Self { config }
    }

    /// Classify `line` and render it.
    pub fn render_line(&self, line: &str) -> RenderedLine {
        let prefix = self.config.dialect.text_prefix();
        let kind = classify(line);
        let mut malformed_link = false;

        let text = match kind {
            LineKind::Link => match link::parse_link(line) {
                Some(parsed) => link::format_link(&parsed, self.config.dialect),
                None => {
                    debug!("link line without a target, passing through: {:?}", line);
                    malformed_link = true;
                    line.to_string()
                }
            },
            LineKind::Heading => self.heading(line, prefix),
            LineKind::ListItem => self.list_item(line, prefix),
            LineKind::Quote => self.quote(line, prefix),
            LineKind::Paragraph => self.paragraph(line, prefix),
            LineKind::Blank => String::new(),
        };

        RenderedLine {
            kind,
            text,
            malformed_link,
        }
    }

    /// Emit `line` unchanged behind the dialect prefix (preformatted content).
    pub fn verbatim(&self, line: &str) -> String {
        format!("{}{line}", self.config.dialect.text_prefix())
    }

    /// Wrapped heading text followed by an `=` underline as long as the
    /// longest wrapped line.
    fn heading(&self, line: &str, prefix: &str) -> String {
        let text = RE_HEADING_MARKER.replace(line, "");
        let wrapped = wrap_text(&text, self.config.width, "");
        let underline_len = wrapped
            .iter()
            .map(|l| l.trim_end().chars().count())
            .max()
            .unwrap_or(0);

        let mut out: Vec<String> = wrapped.iter().map(|l| format!("{prefix}{l}")).collect();
        out.push(format!("{prefix}{}", "=".repeat(underline_len)));
        out.join("\n")
    }

    fn list_item(&self, line: &str, prefix: &str) -> String {
        let text = RE_LIST_MARKER.replace(line, "");
        prefixed(
            wrap_text(&text, self.config.width, LIST_CONTINUATION_INDENT),
            prefix,
        )
    }

    fn quote(&self, line: &str, prefix: &str) -> String {
        let text = RE_QUOTE_MARKER.replace(line, "");
        let nested = format!("{prefix}{QUOTE_PREFIX}");
        self.paragraph(&text, &nested)
    }

    fn paragraph(&self, text: &str, prefix: &str) -> String {
        prefixed(wrap_text(text, self.config.width, ""), prefix)
    }
}

fn prefixed(lines: Vec<String>, prefix: &str) -> String {
    lines
        .into_iter()
        .map(|l| format!("{prefix}{l}"))
        .collect::<Vec<_>>()
        .join("\n")
}
