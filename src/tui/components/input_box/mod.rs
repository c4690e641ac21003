//! # InputBox Component
//!
//! The multi-line composition area.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste
//! - Handle editing (backspace, delete, cursor movement)
//! - Report every content change so the session can enter `Typing`
//! - Report submission (Enter). The buffer is *not* cleared here: the
//!   session clears its input once the reply arrives, and the TUI mirrors
//!   that back via `set_text()`.
//! - Show a placeholder while empty

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    inner_width, wrap_options, wrap_line_count,
    prev_char_boundary, next_char_boundary,
    VERTICAL_OVERHEAD, MAX_VISIBLE_LINES
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User pressed Enter
    Submit,
    /// Text content changed
    ContentChanged,
    /// Only the cursor moved
    CursorMoved,
}

/// Text input component.
///
/// # Props
///
/// - `placeholder`: shown dimmed while the buffer is empty
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: cursor position and internal scroll (see `CursorState`)
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Placeholder text (Prop)
    pub placeholder: String,
    cursor: CursorState,
}

impl InputBox {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            placeholder: placeholder.into(),
            cursor: CursorState::new(),
        }
    }

    /// Replace the buffer from outside (e.g. the session cleared its input).
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor.move_to_end(&self.buffer);
    }

    /// Height needed for the current content, clamped to the visible range.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let lines = wrap_line_count(&self.buffer, inner_width(content_width));
        lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Text for the visible window when the content scrolls.
    fn get_visible_text(&self, content_width: u16) -> String {
        if self.cursor.scroll_offset == 0 {
            return self.buffer.clone();
        }

        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());
        lines[start..end].join("\n")
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_content_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(ratatui::widgets::Padding::horizontal(1));

        let input = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(self.get_visible_text(area.width))
        };

        frame.render_widget(input.block(block), area);

        let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((cursor_x + 1, cursor_y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Terminals send CR line endings in bracketed paste
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.buffer.insert_str(self.cursor.pos, &text);
                self.cursor.pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1, self.cursor.last_content_width)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1, self.cursor.last_content_width)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered_text(input: &mut InputBox, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new("Ask away");
        assert!(input.buffer.is_empty());
        assert_eq!(input.placeholder, "Ask away");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = InputBox::new("");

        assert_eq!(input.handle_event(&TuiEvent::InputChar('a')), Some(InputEvent::ContentChanged));
        assert_eq!(input.handle_event(&TuiEvent::InputChar('b')), Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "ab");

        assert_eq!(input.handle_event(&TuiEvent::Backspace), Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_backspace_on_empty_is_not_a_change() {
        let mut input = InputBox::new("");
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut input = InputBox::new("");
        input.set_text("hello");

        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(InputEvent::Submit));
        assert_eq!(input.buffer, "hello");
    }

    #[test]
    fn test_submit_on_empty_still_reported() {
        // The session decides what an empty submit means (a notice).
        let mut input = InputBox::new("");
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(InputEvent::Submit));
    }

    #[test]
    fn test_cursor_moves_are_not_content_changes() {
        let mut input = InputBox::new("");
        input.set_text("ab");
        assert_eq!(input.handle_event(&TuiEvent::CursorLeft), Some(InputEvent::CursorMoved));
        assert_eq!(input.handle_event(&TuiEvent::InputChar('x')), Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "axb");
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut input = InputBox::new("");
        input.handle_event(&TuiEvent::Paste("one\r\ntwo\rthree".to_string()));
        assert_eq!(input.buffer, "one\ntwo\nthree");
    }

    #[test]
    fn test_delete_multibyte() {
        let mut input = InputBox::new("");
        input.set_text("🦑!");
        input.handle_event(&TuiEvent::CursorHome);
        assert_eq!(input.handle_event(&TuiEvent::Delete), Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "!");
    }

    #[test]
    fn test_set_text_clears() {
        let mut input = InputBox::new("");
        input.set_text("draft");
        input.set_text("");
        assert!(input.buffer.is_empty());
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_height_grows_then_clamps() {
        let mut input = InputBox::new("");
        assert_eq!(input.calculate_height(40), 3);
        input.set_text("a\nb");
        assert_eq!(input.calculate_height(40), 4);
        input.set_text("1\n2\n3\n4\n5\n6\n7");
        assert_eq!(input.calculate_height(40), MAX_VISIBLE_LINES + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let mut input = InputBox::new("Please write a description");
        let text = rendered_text(&mut input, 40, 3);
        assert!(text.contains("Please write a description"));
    }

    #[test]
    fn test_render_shows_buffer() {
        let mut input = InputBox::new("placeholder");
        input.set_text("squid ink");
        let text = rendered_text(&mut input, 40, 3);
        assert!(text.contains("squid ink"));
        assert!(!text.contains("placeholder"));
    }
}
