//! Link lines: parsing `=> target [label]`, resolving the target, and
//! formatting it for the output dialect.
//!
//! Targets fall into three groups:
//!
//! * `gopher://host[:port]/path`: rendered as a full gophermap entry
//!   pointing at the remote server.
//! * `http://`, `https://`, `gemini://`: rendered as an `h` line with a
//!   `URL:` selector, the convention gopher clients and servers use to hand
//!   a foreign URL to the user.
//! * anything else: a site-relative path. `.gmi` files are served by the
//!   gopher side as pre-rendered text, so `foo.gmi` becomes `foo.txt` and
//!   `dir/index.gmi` becomes `dir`.

use crate::config::Dialect;
use crate::pipeline::doctype::{self, DocumentType};

const GOPHER_SCHEME: &str = "gopher://";
const WEB_SCHEMES: [&str; 3] = ["http://", "https://", "gemini://"];
const DEFAULT_GOPHER_PORT: &str = "70";

/// Gopher item type characters that may lead the path of a gopher URL.
const ITEM_TYPES: &str = "0123456789+:;<ITdghiprs";

/// A parsed `=>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    pub target: &'a str,
    /// Free text after the target, rejoined with single spaces.
    pub label: Option<String>,
}

impl Link<'_> {
    /// Label shown to the user; the target itself when no label was given.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.target)
    }
}

/// Parse a link line.
///
/// The first whitespace-separated token is the `=>` marker and the second is
/// the target. Returns `None` when there is no token after the marker, so
/// `=>` and `=>/foo.gmi` both pass through unchanged.
pub fn parse_link(line: &str) -> Option<Link<'_>> {
    if !line.starts_with("=>") {
        return None;
    }
    let mut tokens = line.split_whitespace().skip(1);
    let target = tokens.next()?;
    let label: Vec<&str> = tokens.collect();
    Some(Link {
        target,
        label: (!label.is_empty()).then(|| label.join(" ")),
    })
}

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// A remote gopher resource; `None` when the URL has no path at all
    /// (`gopher://host`) or no host.
    Gopher(Option<GopherLocation>),
    /// An http(s) or gemini URL.
    Web(&'a str),
    /// A path on the same site.
    Internal(&'a str),
}

/// Host, port and selector of a `gopher://` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GopherLocation {
    pub host: String,
    pub port: String,
    pub selector: String,
    pub doc_type: DocumentType,
}

/// Classify a link target.
pub fn resolve(target: &str) -> LinkTarget<'_> {
    if let Some(rest) = target.strip_prefix(GOPHER_SCHEME) {
        LinkTarget::Gopher(parse_gopher(rest))
    } else if WEB_SCHEMES.iter().any(|scheme| target.starts_with(scheme)) {
        LinkTarget::Web(target)
    } else {
        LinkTarget::Internal(target)
    }
}

/// Parse what follows `gopher://`. A URL without a path component yields
/// `None`; the link then renders as its bare label.
fn parse_gopher(rest: &str) -> Option<GopherLocation> {
    let (authority, path) = rest.split_once('/')?;
    if authority.is_empty() {
        return None;
    }
    let (host, port) = split_port(authority);

    Some(GopherLocation {
        host: host.to_string(),
        port: port.to_string(),
        selector: selector(path),
        doc_type: doctype::sniff(doctype::file_name(path), false),
    })
}

/// Split `host[:port]`. Only an all-digit suffix counts as a port, so a
/// bracketed IPv6 literal such as `[::1]` stays whole.
fn split_port(authority: &str) -> (&str, &str) {
    match authority.rsplit_once(':') {
        Some((host, "")) => (host, DEFAULT_GOPHER_PORT),
        Some((host, port)) if port.bytes().all(|b| b.is_ascii_digit()) => (host, port),
        _ => (authority, DEFAULT_GOPHER_PORT),
    }
}

/// Turn a gopher URL path into a selector, dropping a leading item-type
/// segment (`/1/foo` → `/foo`).
fn selector(path: &str) -> String {
    let path = match path.split_once('/') {
        Some((kind, rest)) if is_item_type(kind) => rest,
        None if is_item_type(path) => "",
        _ => path,
    };
    format!("/{path}")
}

fn is_item_type(segment: &str) -> bool {
    segment.len() == 1 && ITEM_TYPES.contains(segment)
}

/// Rewrite a site-relative path for gopher navigation.
///
/// `post.gmi` → `post.txt`; `dir/index.gmi` → `dir`; `index.gmi` → `/`.
/// Other paths are returned unchanged.
pub fn rewrite_internal_path(target: &str) -> String {
    let (dir, filename) = match target.rsplit_once('/') {
        Some((dir, filename)) => (Some(dir), filename),
        None => (None, target),
    };
    match doctype::extension(filename) {
        Some(ext) if ext.eq_ignore_ascii_case("gmi") => {
            if filename == "index.gmi" {
                match dir {
                    Some(dir) if !dir.is_empty() => dir.to_string(),
                    _ => "/".to_string(),
                }
            } else {
                let stem = &filename[..filename.len() - ext.len()];
                match dir {
                    Some(dir) => format!("{dir}/{stem}txt"),
                    None => format!("{stem}txt"),
                }
            }
        }
        _ => target.to_string(),
    }
}

/// Format a parsed link for `dialect`.
pub fn format_link(link: &Link<'_>, dialect: Dialect) -> String {
    if !dialect.emits_type_codes() {
        return match link.label.as_deref() {
            Some(label) if !label.is_empty() => format!("{label}: {}", link.target),
            _ => link.target.to_string(),
        };
    }

    let label = link.display_label();
    match resolve(link.target) {
        LinkTarget::Gopher(Some(loc)) => format!(
            "{}{label}\t{}\t{}\t{}",
            loc.doc_type, loc.selector, loc.host, loc.port
        ),
        LinkTarget::Gopher(None) => label.to_string(),
        LinkTarget::Web(url) => format!("{}{label}\tURL:{url}", DocumentType::Html),
        LinkTarget::Internal(path) => {
            let doc_type = doctype::sniff(doctype::file_name(path), true);
            format!("{doc_type}{label}\t{}", rewrite_internal_path(path))
        }
    }
}
