//! Shared text measuring and cutting utilities.
//!
//! Two different limits apply to text on screen: descriptions are shortened
//! by character count (with a trailing `...`), while whole lines are clipped
//! to the terminal width measured in display columns. Both are UTF-8 safe.
//!
//! # Example
//!
//! ```rust
//! use kbase::ui::helpers::{clip_to_width, truncate_with_ellipsis};
//!
//! assert_eq!(truncate_with_ellipsis("abcdef", 3), "abc...");
//! assert_eq!(clip_to_width("日本語", 4), "日本");
//! ```

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `text` to `max_chars` characters followed by `...`.
///
/// Text of at most `max_chars` characters is returned unchanged.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Folds multi-line `text` onto one screen row.
///
/// Line breaks become `⏎` and any other control character a space. A single
/// trailing line break, as left by YAML block scalars, is dropped.
#[must_use]
pub fn single_line(text: &str) -> String {
    let text = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text);
    text.replace("\r\n", "\n")
        .chars()
        .map(|c| match c {
            '\n' | '\r' => '⏎',
            c if c.is_control() => ' ',
            c => c,
        })
        .collect()
}

/// Display width of `text` in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Longest prefix of `text` that fits in `max_width` columns.
///
/// A wide character that would straddle the limit is dropped entirely.
#[must_use]
pub fn clip_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (byte_index, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            return &text[..byte_index];
        }
        used += w;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_with_ellipsis("short", 50), "short");
        assert_eq!(truncate_with_ellipsis(&"a".repeat(50), 50), "a".repeat(50));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let text = "ü".repeat(51);
        assert_eq!(truncate_with_ellipsis(&text, 50), format!("{}...", "ü".repeat(50)));
    }

    #[test]
    fn single_line_folds_breaks_and_controls() {
        assert_eq!(single_line("cat <<EOF\nhello\nEOF\n"), "cat <<EOF⏎hello⏎EOF");
        assert_eq!(single_line("a\r\nb"), "a⏎b");
        assert_eq!(single_line("a\tb\x1b[31m"), "a b [31m");
        assert_eq!(single_line("plain"), "plain");
    }

    #[test]
    fn clip_respects_wide_characters() {
        assert_eq!(clip_to_width("hello", 3), "hel");
        assert_eq!(clip_to_width("hello", 10), "hello");
        assert_eq!(clip_to_width("日本語", 5), "日本");
        assert_eq!(clip_to_width("abc", 0), "");
    }
}
