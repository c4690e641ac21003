//! Cursor tracking for the InputBox.
//!
//! `CursorState` holds the byte offset into the buffer plus the internal
//! scroll position. The buffer itself belongs to `InputBox` and is passed
//! in explicitly.

use super::text_wrap::{
    BORDER_OFFSET, MAX_VISIBLE_LINES, display_width, inner_width, wrap_line_count, wrap_options,
};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

pub(super) struct CursorState {
    /// Byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible wrapped line
    pub scroll_offset: u16,
    /// Box width from the last render, for vertical movement between renders
    pub last_content_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 64;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Place the cursor at the end of `buffer` (after the text is replaced).
    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
        self.scroll_offset = 0;
    }

    /// Wrapped lines paired with their starting byte offset in `buffer`.
    fn line_starts(buffer: &str, width: u16) -> Vec<(usize, usize)> {
        let mut starts = Vec::new();
        let mut offset = 0;
        for line in textwrap::wrap(buffer, wrap_options(width)) {
            // Wrapped lines are slices of the buffer minus the separators
            // textwrap swallowed, so find each one past the previous.
            let start = buffer[offset..]
                .find(line.as_ref())
                .map(|i| offset + i)
                .unwrap_or(offset);
            starts.push((start, line.len()));
            offset = start + line.len();
            if offset < buffer.len() && buffer.as_bytes()[offset] == b'\n' {
                offset += 1;
            }
        }
        starts
    }

    /// Byte range `(start, end)` each wrapped line owns. A line runs up to
    /// the separator before the next line, so trailing spaces textwrap
    /// trimmed still belong to it; the last line runs to the end of the
    /// buffer.
    fn line_spans(buffer: &str, width: u16) -> Vec<(usize, usize)> {
        let starts = Self::line_starts(buffer, width);
        starts
            .iter()
            .enumerate()
            .map(|(i, &(start, len))| {
                let end = match starts.get(i + 1) {
                    Some(&(next, _)) if next > start + len => next - 1,
                    Some(&(next, _)) => next,
                    None => buffer.len(),
                };
                (start, end)
            })
            .collect()
    }

    /// Move one wrapped line up (`-1`) or down (`1`), keeping the display
    /// column where possible. Returns `false` at the first/last line.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let spans = Self::line_spans(buffer, width);
        let current = spans
            .iter()
            .position(|&(_, end)| self.pos <= end)
            .unwrap_or(spans.len().saturating_sub(1));

        let target = match direction {
            d if d < 0 && current > 0 => current - 1,
            d if d > 0 && current + 1 < spans.len() => current + 1,
            _ => return false,
        };

        let column = display_width(&buffer[spans[current].0..self.pos]);
        let (start, end) = spans[target];
        self.pos = start + byte_at_column(&buffer[start..end], column);
        true
    }

    /// Wrapped line (0-based) the cursor sits on.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }

        let before = &buffer[..self.pos];
        let lines = textwrap::wrap(before, wrap_options(width));
        let mut line = lines.len().saturating_sub(1) as u16;

        // A cursor right after a newline starts a line textwrap didn't emit
        if before.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
            line += 1;
        }
        line
    }

    /// Scroll just enough to keep the cursor line visible.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let total = wrap_line_count(buffer, inner_width(content_width));
        if total <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let line = self.calculate_line(buffer, content_width);
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = line + 1 - MAX_VISIBLE_LINES;
        }
    }

    /// Terminal (column, row) of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        }

        let line = self.calculate_line(buffer, area.width);

        // Column from the start of the logical line, re-wrapped on its own.
        // textwrap trims trailing spaces, so measure the raw text instead.
        let before = &buffer[..self.pos];
        let logical = &before[before.rfind('\n').map(|i| i + 1).unwrap_or(0)..];
        let segments = Self::line_starts(logical, width);
        let tail_start = segments.last().map(|&(start, _)| start).unwrap_or(0);
        let column = display_width(&logical[tail_start..]).min(width);

        let visible_line = line.saturating_sub(self.scroll_offset);
        (
            area.x + BORDER_OFFSET + column,
            area.y + BORDER_OFFSET + visible_line,
        )
    }
}

/// Byte offset in `text` of the char at display `column`, or the end of
/// `text` if it is narrower. A wide glyph straddling the column is
/// stepped over backwards.
fn byte_at_column(text: &str, column: u16) -> usize {
    let mut width = 0u16;
    for (i, c) in text.char_indices() {
        let w = u16::try_from(c.width().unwrap_or(0)).unwrap_or(u16::MAX);
        if width.saturating_add(w) > column {
            return i;
        }
        width += w;
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_movement_across_newline() {
        let buffer = "first\nsecond";
        let mut cursor = CursorState::new();
        cursor.move_to_end(buffer);

        assert!(cursor.move_vertically(buffer, -1, 40));
        assert_eq!(cursor.pos, 5); // column 6 clamps to end of "first"
        assert!(!cursor.move_vertically(buffer, -1, 40));

        assert!(cursor.move_vertically(buffer, 1, 40));
        assert_eq!(cursor.pos, 11);
    }

    #[test]
    fn test_vertical_movement_after_trailing_space() {
        let buffer = "x\nab ";
        let mut cursor = CursorState::new();
        cursor.move_to_end(buffer);

        assert!(cursor.move_vertically(buffer, -1, 40));
        assert_eq!(cursor.pos, 1); // end of "x"
        assert!(cursor.move_vertically(buffer, 1, 40));
        assert_eq!(cursor.pos, 3); // column 1 of "ab "
    }

    #[test]
    fn test_vertical_movement_on_soft_wrapped_spaces() {
        // Inner width 6: "hello " / "world"
        let buffer = "hello world";
        let mut cursor = CursorState::new();
        cursor.pos = 6; // start of "world"

        assert!(cursor.move_vertically(buffer, -1, 10));
        assert_eq!(cursor.pos, 0);
        assert!(cursor.move_vertically(buffer, 1, 10));
        assert_eq!(cursor.pos, 6);
    }

    #[test]
    fn test_vertical_movement_keeps_display_column() {
        // "イカ" is 4 columns wide, 6 bytes long
        let buffer = "イカ\nabcdef";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len() - 2; // after "abcd", column 4

        assert!(cursor.move_vertically(buffer, -1, 40));
        assert_eq!(cursor.pos, 6); // after "イカ", column 4

        assert!(cursor.move_vertically(buffer, 1, 40));
        assert_eq!(cursor.pos, 7 + 4);
    }

    #[test]
    fn test_vertical_movement_inside_wide_glyph_steps_back() {
        let buffer = "abc\nイカ";
        let mut cursor = CursorState::new();
        cursor.pos = 1; // column 1, the middle of "イ"

        assert!(cursor.move_vertically(buffer, 1, 40));
        assert_eq!(cursor.pos, 4);
    }

    #[test]
    fn test_calculate_line_after_newline() {
        let buffer = "one\n";
        let mut cursor = CursorState::new();
        cursor.move_to_end(buffer);
        assert_eq!(cursor.calculate_line(buffer, 40), 1);
    }

    #[test]
    fn test_screen_pos_on_first_line() {
        let buffer = "ink";
        let mut cursor = CursorState::new();
        cursor.move_to_end(buffer);
        let area = Rect::new(10, 5, 40, 3);
        assert_eq!(cursor.screen_pos(buffer, area), (14, 6));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let buffer = "1\n2\n3\n4\n5\n6";
        let mut cursor = CursorState::new();
        cursor.move_to_end(buffer);
        cursor.update_scroll_offset(buffer, 40);
        assert_eq!(cursor.scroll_offset, 2);
    }
}
