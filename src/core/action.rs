//! # Actions
//!
//! Everything that can happen to the chat session becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The responder comes back? That's `Action::ResponseReady(text)`.
//!
//! `update()` mutates the session and returns an `Effect` describing the
//! side effect the caller must perform (arm a timer, call the responder,
//! start the reveal). No I/O happens here.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```

use log::{debug, info, warn};

use crate::core::phase::Trigger;
use crate::core::state::ChatSession;

/// Shown when the user submits an empty or whitespace-only message.
pub const EMPTY_INPUT_NOTICE: &str = "Please enter text message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The composition area now holds this text.
    InputChanged(String),
    /// The debounce timer armed for `revision` fired.
    IdleTimeout { revision: u64 },
    Submit,
    /// The responder finished with this reply.
    ResponseReady(String),
    /// The responder failed; the string is a human-readable reason.
    ResponseFailed(String),
    /// The response panel finished revealing the reply.
    DisplayComplete,
    DismissNotice { id: u64 },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// (Re)arm the idle debounce for this input revision.
    ScheduleIdleCheck { revision: u64 },
    /// Hand the input to the responder.
    RequestResponse { input: String },
    /// Arm the timer that clears notice `id`.
    ScheduleNoticeDismiss { id: u64 },
    /// Start revealing this reply in the response panel.
    RevealResponse(String),
    Quit,
}

pub fn update(session: &mut ChatSession, action: Action) -> Effect {
    match action {
        Action::InputChanged(text) => {
            session.input_text = text;
            session.input_revision += 1;
            session.apply(Trigger::InputChanged);
            Effect::ScheduleIdleCheck {
                revision: session.input_revision,
            }
        }
        Action::IdleTimeout { revision } => {
            if revision != session.input_revision {
                debug!(
                    "Stale idle timeout (revision {}, current {})",
                    revision, session.input_revision
                );
                return Effect::None;
            }
            session.apply(Trigger::QuietPeriod);
            Effect::None
        }
        Action::Submit => {
            if session.is_submitting {
                debug!("Submit ignored: a response is already in flight");
                return Effect::None;
            }
            if session.input_text.trim().is_empty() {
                info!("Empty submission rejected");
                let id = session.raise_notice(EMPTY_INPUT_NOTICE);
                return Effect::ScheduleNoticeDismiss { id };
            }

            info!("Submitting {} chars", session.input_text.chars().count());
            session.is_submitting = true;
            // Visible right away; the panel shows it while we wait.
            session.response_text = session.input_text.clone();
            session.apply(Trigger::SubmitAccepted);
            Effect::RequestResponse {
                input: session.input_text.clone(),
            }
        }
        Action::ResponseReady(text) => {
            if !session.is_submitting {
                warn!("Response arrived with no submission in flight, dropping it");
                return Effect::None;
            }
            session.input_text.clear();
            session.is_submitting = false;
            session.response_text = text;

            if session.response_text.is_empty() {
                warn!("Responder returned an empty reply");
                session.apply(Trigger::ResponseFailed);
                return Effect::None;
            }
            session.apply(Trigger::ResponseAvailable);
            Effect::RevealResponse(session.response_text.clone())
        }
        Action::ResponseFailed(reason) => {
            if !session.is_submitting {
                warn!("Failure reported with no submission in flight: {}", reason);
                return Effect::None;
            }
            warn!("Responder failed: {}", reason);
            session.is_submitting = false;
            session.apply(Trigger::ResponseFailed);
            let id = session.raise_notice(format!("Squid Master could not answer: {reason}"));
            Effect::ScheduleNoticeDismiss { id }
        }
        Action::DisplayComplete => {
            session.apply(Trigger::DisplayComplete);
            Effect::None
        }
        Action::DismissNotice { id } => {
            if session.notice.as_ref().is_some_and(|n| n.id == id) {
                session.notice = None;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
