//! # ResponseView Component
//!
//! The panel under the button that shows the last response.
//!
//! ## States
//!
//! - **Pending**: a submission is in flight. The submitted text is shown
//!   dimmed straight away, before the reply exists.
//! - **Revealing**: the reply arrived; it types itself out one char per
//!   `char_interval`. When the last char lands, `advance()` reports
//!   completion exactly once and the TUI tells the session.
//! - **Shown**: reveal finished; the full reply stays on screen.
//!
//! Time is passed in (`Instant`), so the typewriter is testable without a
//! clock.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;

/// Typewriter progress over a reply.
pub struct Typewriter {
    text: String,
    total_chars: usize,
    started: Instant,
    char_interval: Duration,
    revealed: usize,
    reported: bool,
}

impl Typewriter {
    pub fn new(text: String, char_interval: Duration, now: Instant) -> Self {
        let total_chars = text.chars().count();
        Self {
            text,
            total_chars,
            started: now,
            char_interval,
            revealed: 0,
            reported: false,
        }
    }

    /// Move the reveal forward to `now`. Returns `true` the first time the
    /// whole text is visible, `false` before and after.
    pub fn advance(&mut self, now: Instant) -> bool {
        self.revealed = if self.char_interval.is_zero() {
            self.total_chars
        } else {
            let elapsed = now.saturating_duration_since(self.started);
            let steps = elapsed.as_nanos() / self.char_interval.as_nanos();
            usize::try_from(steps).unwrap_or(usize::MAX).min(self.total_chars)
        };

        if self.is_done() && !self.reported {
            self.reported = true;
            return true;
        }
        false
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.total_chars
    }

    /// The part of the text revealed so far.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }
}

/// Stateful panel holding the current typewriter (if any).
pub struct ResponseView {
    pub char_interval: Duration,
    typewriter: Option<Typewriter>,
}

impl ResponseView {
    pub fn new(char_interval: Duration) -> Self {
        Self {
            char_interval,
            typewriter: None,
        }
    }

    /// Start revealing `text`, replacing any reveal in progress.
    pub fn start(&mut self, text: String, now: Instant) {
        self.typewriter = Some(Typewriter::new(text, self.char_interval, now));
    }

    /// Advance the reveal; `true` once, when it finishes.
    pub fn advance(&mut self, now: Instant) -> bool {
        self.typewriter.as_mut().is_some_and(|t| t.advance(now))
    }

    pub fn is_revealing(&self) -> bool {
        self.typewriter.as_ref().is_some_and(|t| !t.is_done())
    }

    /// Props for one render pass. A typewriter left over from an older
    /// reply (e.g. the last submission failed) is ignored.
    pub fn panel<'a>(&'a self, response_text: &'a str, pending: bool) -> ResponsePanel<'a> {
        let text = match &self.typewriter {
            Some(typewriter) if !pending && typewriter.text == response_text => {
                typewriter.visible()
            }
            _ => response_text,
        };
        ResponsePanel { text, pending }
    }
}

/// Transient render wrapper around what the panel should show.
pub struct ResponsePanel<'a> {
    text: &'a str,
    pending: bool,
}

impl Component for ResponsePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.pending {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)
        };

        let panel = Paragraph::new(self.text)
            .style(style)
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(ratatui::widgets::Padding::horizontal(1)),
            );

        frame.render_widget(panel, area);
    }
}
