//! Word wrapping for rendered text lines.
//!
//! Lines break only at ASCII spaces. A word longer than the width is left
//! whole on its own line, and hyphenated words are never split at the
//! hyphen. Wrapping is greedy (first fit) so the output does not change when
//! text is appended to a line.

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Wrap `text` to `width` columns, indenting every line after the first
/// with `indent`.
///
/// Always returns at least one line; empty input yields `[""]`. Returned
/// lines carry no trailing spaces.
pub fn wrap_text(text: &str, width: usize, indent: &str) -> Vec<String> {
    let options = Options::new(width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .subsequent_indent(indent);

    let lines: Vec<String> = textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap_text("hello world", 80, ""), vec!["hello world"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", 80, ""), vec![String::new()]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("aaa bbb ccc ddd", 7, "");
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn no_line_exceeds_width() {
        let text = "lorem ipsum dolor sit amet ".repeat(20);
        for line in wrap_text(text.trim(), 80, "") {
            assert!(line.chars().count() <= 80, "too long: {line:?}");
        }
    }

    #[test]
    fn long_word_is_not_split() {
        let word = "x".repeat(100);
        let lines = wrap_text(&format!("a {word} b"), 80, "");
        assert_eq!(lines, vec!["a".to_string(), word, "b".to_string()]);
    }

    #[test]
    fn hyphenated_word_stays_whole() {
        let lines = wrap_text("aaaa well-known", 12, "");
        assert_eq!(lines, vec!["aaaa", "well-known"]);
    }

    #[test]
    fn indent_applies_to_continuation_lines_only() {
        let lines = wrap_text("one two three four", 10, "  ");
        assert_eq!(lines, vec!["one two", "  three", "  four"]);
    }
}
