//! Configuration types for Gemini-to-Gopher conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The output dialect is a plain enum
//! whose policies (text prefix, type codes, link formatting) are looked up
//! with `match` at render time; there is one renderer, not one per dialect.

use crate::error::Gmi2GopherError;
use serde::{Deserialize, Serialize};

/// Wrap width used when none is configured.
pub const DEFAULT_WIDTH: usize = 80;

const MIN_WIDTH: usize = 20;
const MAX_WIDTH: usize = 1000;

/// Configuration for a Gemini-to-Gopher conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use gmi2gopher::{ConversionConfig, Dialect};
///
/// let config = ConversionConfig::builder()
///     .dialect(Dialect::PlainText)
///     .width(72)
///     .build()
///     .unwrap();
/// assert_eq!(config.width, 72);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Output dialect. Default: [`Dialect::GopherMap`].
    pub dialect: Dialect,

    /// Column at which headings, list items, quotes and paragraphs wrap. Default: 80.
    ///
    /// Words longer than the width are never split; such a line simply
    /// overflows.
    pub width: usize,

    /// What to do with ```` ``` ```` fenced blocks. Default: [`FencePolicy::StripDelimiters`].
    pub fence_policy: FencePolicy,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            width: DEFAULT_WIDTH,
            fence_policy: FencePolicy::default(),
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.config.dialect = dialect;
        self
    }

    /// Shorthand for `dialect(Dialect::PlainText)` when `true`.
    pub fn plain_text(mut self, v: bool) -> Self {
        self.config.dialect = if v {
            Dialect::PlainText
        } else {
            Dialect::GopherMap
        };
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    pub fn fence_policy(mut self, policy: FencePolicy) -> Self {
        self.config.fence_policy = policy;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Gmi2GopherError> {
        let c = &self.config;
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&c.width) {
            return Err(Gmi2GopherError::InvalidConfig(format!(
                "width must be {MIN_WIDTH}–{MAX_WIDTH}, got {}",
                c.width
            )));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Target format of the conversion.
///
/// | Dialect | Text prefix | Type codes | Links |
/// |---------|-------------|------------|-------|
/// | `GopherMap` | `i` | yes | `{type}{label}\t{selector}[\t{host}\t{port}]` |
/// | `PlainText` | none | no | `{label}: {target}` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dialect {
    /// Gopher directory listing (gophermap). (default)
    #[default]
    GopherMap,
    /// Stripped plain text.
    PlainText,
}

impl Dialect {
    /// Prefix placed in front of every non-link output line.
    ///
    /// In a gophermap `i` marks an informational (non-selectable) line.
    pub fn text_prefix(self) -> &'static str {
        match self {
            Dialect::GopherMap => "i",
            Dialect::PlainText => "",
        }
    }

    /// Whether link lines carry a leading document type code.
    pub fn emits_type_codes(self) -> bool {
        matches!(self, Dialect::GopherMap)
    }
}

/// Handling of ```` ``` ```` fenced blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FencePolicy {
    /// Drop delimiter lines; fenced content renders like any other line. (default)
    #[default]
    StripDelimiters,
    /// Drop delimiter lines and emit the lines between them verbatim,
    /// unwrapped and unclassified, behind the dialect's text prefix.
    Preserve,
}
