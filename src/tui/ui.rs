//! Screen layout: one centered card, top to bottom.
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ header (title/tagline/status)│
//! │ input box                    │
//! │ submit button                │
//! │ response panel (if any)      │
//! ╰──────────────────────────────╯
//! ```
//!
//! The notice overlay is drawn last, over everything.

use crate::core::state::ChatSession;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::submit_button::BUTTON_HEIGHT;
use crate::tui::components::{Header, NoticeOverlay};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Padding};

/// Card width cap, in columns.
pub const CARD_MAX_WIDTH: u16 = 64;

/// Horizontally centered card area, full height.
pub fn card_area(area: Rect) -> Rect {
    let width = area.width.min(CARD_MAX_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

pub fn draw_ui(frame: &mut Frame, session: &ChatSession, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let card = card_area(frame.area());
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut header = Header::new(
        tui.title.clone(),
        tui.tagline.clone(),
        session.phase.label().to_string(),
    );
    let header_height = header.required_height(inner.width);
    let input_height = tui.input_box.calculate_height(inner.width);

    let [header_area, _, input_area, _, button_area, _, response_area] = Layout::vertical([
        Length(header_height),
        Length(1),
        Length(input_height),
        Length(1),
        Length(BUTTON_HEIGHT),
        Length(1),
        Min(0),
    ])
    .areas(inner);

    header.render(frame, header_area);
    tui.input_box.render(frame, input_area);

    tui.submit_button.busy = session.is_submitting;
    tui.submit_button.spinner_frame = spinner_frame;
    tui.submit_button.render(frame, button_area);

    if !session.response_text.is_empty() && response_area.height > 0 {
        tui.response_view
            .panel(&session.response_text, session.is_submitting)
            .render(frame, response_area);
    }

    if let Some(notice) = &session.notice {
        NoticeOverlay::new(&notice.message).render(frame, frame.area());
    }
}
