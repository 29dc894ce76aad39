//! End-to-end tests for gmi2gopher.
//!
//! These exercise the public API only: in-memory conversion in both
//! dialects, and the file entry points against temporary directories.

use gmi2gopher::{
    convert, convert_file, convert_to_file, ConversionConfig, Dialect, FencePolicy,
    Gmi2GopherError,
};
use pretty_assertions::assert_eq;
use std::fs;

// ── Test helpers ─────────────────────────────────────────────────────────────

const CAPSULE: &str = "\
# My capsule

Welcome to my little corner of Geminispace.

## Links
=> /index.gmi Home
=> /phlog/index.gmi Phlog
=> /phlog/2024-01-01.gmi New year
=> /files/resume.pdf
=> gopher://example.com:7070/1/foo Foo
=> https://example.com Example
=>
* first
* second
> Be excellent to each other.
```
preformatted
```
";

fn plain_config() -> ConversionConfig {
    ConversionConfig::builder()
        .dialect(Dialect::PlainText)
        .build()
        .unwrap()
}

// ── In-memory conversion ─────────────────────────────────────────────────────

#[test]
fn test_capsule_to_gophermap() {
    let out = convert(CAPSULE, &ConversionConfig::default());
    let expected = "\
iMy capsule
i==========

iWelcome to my little corner of Geminispace.

iLinks
i=====
1Home\t/
1Phlog\t/phlog
0New year\t/phlog/2024-01-01.txt
9/files/resume.pdf\t/files/resume.pdf
1Foo\t/foo\texample.com\t7070
hExample\tURL:https://example.com
=>
ifirst
isecond
i> Be excellent to each other.
ipreformatted

";
    assert_eq!(out.text, expected);
    assert_eq!(out.stats.links, 6);
    assert_eq!(out.stats.malformed_links, 1);
    assert_eq!(out.stats.fence_delimiters, 2);
}

#[test]
fn test_capsule_to_plain_text() {
    let out = convert(CAPSULE, &plain_config());
    let expected = "\
My capsule
==========

Welcome to my little corner of Geminispace.

Links
=====
Home: /index.gmi
Phlog: /phlog/index.gmi
New year: /phlog/2024-01-01.gmi
/files/resume.pdf
Foo: gopher://example.com:7070/1/foo
Example: https://example.com
=>
first
second
> Be excellent to each other.
preformatted

";
    assert_eq!(out.text, expected);
}

#[test]
fn test_every_line_terminated() {
    let out = convert("a\nb", &ConversionConfig::default());
    assert!(out.text.ends_with('\n'));
    assert_eq!(out.stats.output_lines, 2);
}

#[test]
fn test_long_paragraph_wraps_at_80() {
    let para = "The quick brown fox jumps over the lazy dog. ".repeat(6);
    let out = convert(para.trim(), &ConversionConfig::default());
    let lines: Vec<&str> = out.text.lines().collect();
    assert!(lines.len() > 1);
    for line in lines {
        assert!(line.starts_with('i'));
        // prefix plus at most 80 columns of text
        assert!(line.chars().count() <= 81, "too long: {line:?}");
    }
}

#[test]
fn test_custom_width() {
    let config = ConversionConfig::builder().width(20).build().unwrap();
    let out = convert("one two three four five six seven", &config);
    assert_eq!(out.text, "ione two three four\nifive six seven\n");
}

#[test]
fn test_internal_gmi_links_become_txt() {
    let config = ConversionConfig::default();
    for target in ["/a.gmi", "b/c.gmi", "../d.gmi", "/deep/er/e.gmi"] {
        let out = convert(&format!("=> {target} x"), &config);
        let selector = out.text.trim_end().split('\t').nth(1).unwrap().to_string();
        assert!(selector.ends_with(".txt"), "{target} → {selector}");
        assert!(out.text.starts_with("0x\t"));
    }
}

#[test]
fn test_preserve_fences_option() {
    let config = ConversionConfig::builder()
        .fence_policy(FencePolicy::Preserve)
        .build()
        .unwrap();
    let text = "```\n#!/bin/sh\n  echo   hi\n```\n# After";
    let out = convert(text, &config);
    assert_eq!(out.text, "i#!/bin/sh\ni  echo   hi\niAfter\ni=====\n");
}

#[test]
fn test_output_serialises_to_json() {
    let out = convert("# Hi", &ConversionConfig::default());
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["stats"]["headings"], 1);
    assert_eq!(json["text"], "iHi\ni==\n");
}

// ── File entry points ────────────────────────────────────────────────────────

#[test]
fn test_convert_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("index.gmi");
    fs::write(&input, "# Hello\r\n=> /about.gmi About\r\n").unwrap();

    let out = convert_file(&input, &ConversionConfig::default()).unwrap();
    assert_eq!(out.text, "iHello\ni=====\n0About\t/about.txt\n\n");
}

#[test]
fn test_convert_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert_file(dir.path().join("missing.gmi"), &ConversionConfig::default())
        .unwrap_err();
    assert!(matches!(err, Gmi2GopherError::FileNotFound { .. }));
}

#[test]
fn test_convert_to_file_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.gmi");
    fs::write(&input, "* one\n* two").unwrap();
    let output = dir.path().join("gopher/posts/post.txt");

    let stats = convert_to_file(&input, &output, &plain_config()).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "one\ntwo\n");
    assert_eq!(stats.list_items, 2);

    // no temp files left next to the output
    let entries: Vec<_> = fs::read_dir(output.parent().unwrap()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_convert_to_file_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("index.gmi");
    let output = dir.path().join("gophermap");
    fs::write(&input, "new").unwrap();
    fs::write(&output, "old contents that are longer").unwrap();

    convert_to_file(&input, &output, &ConversionConfig::default()).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "inew\n");
}
