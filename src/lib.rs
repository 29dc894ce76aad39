//! # gmi2gopher
//!
//! Convert Gemini text (`.gmi`) documents into gopher maps or plain text.
//!
//! ## Why this crate?
//!
//! A capsule written in gemtext often wants a gopher mirror. Gopher clients
//! cannot render gemtext, and a gophermap needs every selectable line to
//! carry an item type, a selector, a host and a port. This crate rewrites
//! each gemtext line into its gophermap equivalent (or into stripped plain
//! text), wrapping prose to a fixed width and translating links so they
//! keep working on the gopher side.
//!
//! ## Pipeline Overview
//!
//! ```text
//! .gmi text
//!  │
//!  ├─ 1. Split     lines on \n / \r\n
//!  ├─ 2. Fences    drop ``` delimiter lines
//!  ├─ 3. Classify  link / heading / list / quote / paragraph / blank
//!  ├─ 4. Render    wrap to width, prefix, underline, resolve links
//!  └─ 5. Output    rendered lines joined with \n + stats
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use gmi2gopher::{convert, ConversionConfig, Dialect};
//!
//! let gmi = "# Welcome\n=> /about.gmi About me\n";
//!
//! let map = convert(gmi, &ConversionConfig::default());
//! assert_eq!(map.text, "iWelcome\ni=======\n0About me\t/about.txt\n\n");
//!
//! let plain = ConversionConfig::builder().dialect(Dialect::PlainText).build().unwrap();
//! assert_eq!(convert(gmi, &plain).text, "Welcome\n=======\nAbout me: /about.gmi\n\n");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `gmi2gopher` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, Dialect, FencePolicy};
pub use convert::{convert, convert_file, convert_to_file};
pub use error::Gmi2GopherError;
pub use output::{ConversionOutput, ConversionStats};
pub use pipeline::doctype::DocumentType;
