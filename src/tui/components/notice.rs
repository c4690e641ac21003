//! # Notice Overlay
//!
//! Toast-style popup at the top center of the screen. Non-blocking: it
//! doesn't take input and disappears when the session drops the notice.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Widest the toast gets, borders included.
const MAX_WIDTH: u16 = 48;

pub struct NoticeOverlay<'a> {
    pub message: &'a str,
}

impl<'a> NoticeOverlay<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Popup rect: sized to the message, centered horizontally, one row
    /// below the top of `outer`.
    pub fn placement(&self, outer: Rect) -> Rect {
        let text_width = u16::try_from(self.message.width()).unwrap_or(u16::MAX);
        let width = text_width
            .saturating_add(4)
            .min(MAX_WIDTH)
            .min(outer.width);
        let inner = width.saturating_sub(4).max(1);
        let lines = text_width.div_ceil(inner).max(1);
        let height = (lines + 2).min(outer.height);

        Rect {
            x: outer.x + (outer.width - width) / 2,
            y: outer.y + u16::from(outer.height > height),
            width,
            height,
        }
    }
}

impl Component for NoticeOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup = self.placement(area);
        frame.render_widget(Clear, popup);

        let toast = Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow))
                    .padding(ratatui::widgets::Padding::horizontal(1)),
            );
        frame.render_widget(toast, popup);
    }
}
