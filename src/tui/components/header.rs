//! # Header Component
//!
//! Card header: title, tagline, and the phase status line.
//!
//! ## Props
//!
//! All fields come from the parent:
//! - `title` / `tagline`: display config
//! - `status`: `Phase::label()` of the current session phase
//!
//! Stateless; it renders what it's given. The status line is the one
//! visible trace of the chat phase, so it is bold and centered like the
//! title.
//!
//! ```text
//!            Squid Master
//!
//! Squid Master will help you handle everything
//! all at once.
//!
//!        I'm ready when you are
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

pub struct Header {
    pub title: String,
    pub tagline: String,
    pub status: String,
}

impl Header {
    pub fn new(title: String, tagline: String, status: String) -> Self {
        Self {
            title,
            tagline,
            status,
        }
    }

    /// Rows needed at `width`: title, gap, tagline (wrapped), gap, status.
    pub fn required_height(&self, width: u16) -> u16 {
        let tagline = Paragraph::new(self.tagline.as_str()).wrap(Wrap { trim: true });
        let tagline_lines = u16::try_from(tagline.line_count(width).max(1)).unwrap_or(u16::MAX);
        tagline_lines.saturating_add(4)
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let tagline_height = self.required_height(area.width).saturating_sub(4);
        let [title_area, _, tagline_area, _, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(tagline_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = Paragraph::new(Line::from(self.title.as_str()))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let tagline = Paragraph::new(self.tagline.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        frame.render_widget(tagline, tagline_area);

        let status = Paragraph::new(Line::from(self.status.as_str()))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(status, status_area);
    }
}
