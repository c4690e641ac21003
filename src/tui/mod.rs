//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the card,
//! and translates keyboard/mouse events into core `Action`s.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! Each iteration:
//! 1. advance the response typewriter (finishing it dispatches `DisplayComplete`)
//! 2. draw if anything changed
//! 3. poll terminal events and dispatch them
//! 4. drain actions produced by timers and the responder
//! 5. mirror the session's input text back into the input box
//!
//! ## Redraw Strategy
//!
//! - **Animating** (spinner, typewriter): draws every ~50ms.
//! - **Otherwise**: polls every 100ms so debounce and notice timers still
//!   show up promptly, but only redraws on events or session changes.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::driver::{SessionDriver, Timing};
use crate::inference::{Responder, SimulatedResponder};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ResponseView, SubmitButton};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_POLL: Duration = Duration::from_millis(50);
const IDLE_POLL: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core session state)
pub struct TuiState {
    pub title: String,
    pub tagline: String,
    pub input_box: InputBox,
    pub submit_button: SubmitButton,
    pub response_view: ResponseView,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            input_box: InputBox::new(config.placeholder.clone()),
            submit_button: SubmitButton::new(),
            response_view: ResponseView::new(config.reveal_char_interval),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Enter be told apart from Enter;
        // terminals without it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Build the responder the session talks to.
pub fn build_responder(config: &ResolvedConfig) -> Arc<dyn Responder> {
    Arc::new(SimulatedResponder::new(config.latency))
}

/// What the loop should do after handling one terminal event.
enum Flow {
    Continue,
    Quit,
}

/// Route one terminal event: the input box gets first look, clicks go to
/// the button. Returns `Flow::Quit` when the session asked to quit.
fn handle_terminal_event(
    event: TuiEvent,
    driver: &mut SessionDriver,
    tui: &mut TuiState,
) -> Flow {
    let action = match event {
        TuiEvent::Resize => return Flow::Continue,
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::MouseClick(column, row) => {
            tui.submit_button.hit(column, row).then_some(Action::Submit)
        }
        other => match tui.input_box.handle_event(&other) {
            Some(InputEvent::ContentChanged) => {
                Some(Action::InputChanged(tui.input_box.buffer.clone()))
            }
            // Enter while in flight is swallowed, same as the disabled button
            Some(InputEvent::Submit) if driver.session().is_submitting => None,
            Some(InputEvent::Submit) => Some(Action::Submit),
            Some(InputEvent::CursorMoved) | None => None,
        },
    };

    match action.map(|a| driver.dispatch(a)) {
        Some(Effect::Quit) => Flow::Quit,
        Some(effect) => {
            apply_presentation_effect(effect, tui);
            Flow::Continue
        }
        None => Flow::Continue,
    }
}

/// The effects the driver leaves to the presentation layer.
fn apply_presentation_effect(effect: Effect, tui: &mut TuiState) {
    if let Effect::RevealResponse(text) = effect {
        debug!("Starting reveal of {} chars", text.chars().count());
        tui.response_view.start(text, Instant::now());
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let responder = build_responder(&config);
    let mut driver = SessionDriver::new(responder, Timing::from(&config));
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        // Typewriter progress; finishing it is the display-complete callback
        if tui.response_view.advance(Instant::now()) {
            driver.dispatch(Action::DisplayComplete);
            needs_redraw = true;
        }

        let animating = driver.session().is_submitting || tui.response_view.is_revealing();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, driver.session(), &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_POLL } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout)?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything pending before the next draw
        let mut pending = first_event;
        while let Some(event) = pending {
            if let Flow::Quit = handle_terminal_event(event, &mut driver, &mut tui) {
                break 'main;
            }
            pending = poll_event_immediate()?;
        }

        // Actions from timers and the responder
        while let Some(action) = driver.try_next() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match driver.dispatch(action) {
                Effect::Quit => break 'main,
                effect => apply_presentation_effect(effect, &mut tui),
            }
        }

        // The session owns the input text; it clears it when a reply lands
        if tui.input_box.buffer != driver.session().input_text {
            tui.input_box.set_text(&driver.session().input_text);
            needs_redraw = true;
        }
    }

    info!("Squid Master shutting down");
    ratatui::restore();
    Ok(())
}
