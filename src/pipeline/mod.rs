//! Pipeline stages for Gemini-to-Gopher conversion.
//!
//! Each submodule implements exactly one step so each is testable on its
//! own.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ classify ──▶ render ──▶ (joined by convert)
//! (file)    (per line)   ├─ wrap      headings, lists, quotes, paragraphs
//!                        └─ link      ├─ doctype
//!                                     └─ target rewrite
//! ```
//!
//! 1. [`input`]    read the document from disk as UTF-8
//! 2. [`classify`] decide what construct each line is
//! 3. [`render`]   render a line for the configured dialect
//! 4. [`wrap`]     word-wrap text to the configured width
//! 5. [`link`]     parse `=>` lines and resolve their targets
//! 6. [`doctype`]  sniff gopher item types from file extensions

pub mod classify;
pub mod doctype;
pub mod input;
pub mod link;
pub mod render;
pub mod wrap;
