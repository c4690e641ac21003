//! Wrapping helpers and dimensions for the input box.
//!
//! Stateless; nothing here knows about `InputBox` or `CursorState`.

use unicode_width::UnicodeWidthStr;

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Content lines shown before the box starts scrolling internally
pub(super) const MAX_VISIBLE_LINES: u16 = 4;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width for a box `content_width` columns wide; 0 if too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrapped line count, including the empty line after a trailing newline
/// that textwrap leaves out.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }
    count
}

/// Terminal columns occupied by `text` (wide glyphs count double).
pub(super) fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Byte offset of the char boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the char boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_of_empty_text_is_one() {
        assert_eq!(wrap_line_count("", 40), 1);
        assert_eq!(wrap_line_count("squid", 0), 1);
    }

    #[test]
    fn long_word_breaks_across_lines() {
        assert_eq!(wrap_line_count("tentacletentacle", 8), 2);
    }

    #[test]
    fn trailing_newline_opens_a_line() {
        assert_eq!(wrap_line_count("ink\n", 40), 2);
        assert_eq!(wrap_line_count("a\nb\nc", 40), 3);
    }

    #[test]
    fn display_width_counts_wide_glyphs() {
        assert_eq!(display_width("squid"), 5);
        assert_eq!(display_width("イカ"), 4);
    }

    #[test]
    fn char_boundaries_step_over_multibyte() {
        // "a🦑b": the squid is 4 bytes starting at offset 1
        let s = "a🦑b";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 5);
        assert_eq!(next_char_boundary(s, 6), 6);
        assert_eq!(prev_char_boundary(s, 6), 5);
        assert_eq!(prev_char_boundary(s, 5), 1);
        assert_eq!(prev_char_boundary(s, 1), 0);
    }
}
