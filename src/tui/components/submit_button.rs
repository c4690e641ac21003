//! # SubmitButton Component
//!
//! Full-width button under the input box. While a submission is in flight
//! it shows a spinner and is disabled: `hit()` reports no click, so the
//! session never sees a second submit from it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const BUTTON_LABEL: &str = "Send your request to Squid Master";
pub const BUTTON_HEIGHT: u16 = 3;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct SubmitButton {
    /// Disabled + spinner while true (Prop)
    pub busy: bool,
    /// Animation frame counter (Prop)
    pub spinner_frame: usize,
    /// Where the button was last drawn, for click hit testing
    area: Option<Rect>,
}

impl SubmitButton {
    pub fn new() -> Self {
        Self {
            busy: false,
            spinner_frame: 0,
            area: None,
        }
    }

    /// Whether a click at (`column`, `row`) activates the button.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        !self.busy
            && self
                .area
                .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    fn label(&self) -> String {
        if self.busy {
            SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()].to_string()
        } else {
            BUTTON_LABEL.to_string()
        }
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = Some(area);

        let style = if self.busy {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let button = Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_type(BorderType::Rounded));

        frame.render_widget(button, area);
    }
}
