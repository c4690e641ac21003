//! # Session State
//!
//! Everything the chat screen knows, in one owned record. There is no
//! ambient state: the reducer in action.rs receives `&mut ChatSession`
//! and the TUI only ever reads it.
//!
//! ```text
//! ChatSession
//! ├── input_text: String        // composition area contents
//! ├── response_text: String     // last submitted message / reply
//! ├── phase: Phase              // idle | typing | processing | response
//! ├── is_submitting: bool       // a reply is in flight
//! ├── notice: Option<Notice>    // transient advisory ("toast")
//! └── input_revision: u64       // bumped on every input change
//! ```
//!
//! Invariant: `phase == Response` implies `response_text` is non-empty.
//! `apply()` refuses any transition that would break it.

use log::{debug, warn};

use crate::core::phase::{Phase, Trigger, transition};

/// A transient, non-blocking advisory message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Distinguishes this notice from a later one with the same text,
    /// so an old dismissal timer can't clear a newer notice.
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ChatSession {
    pub input_text: String,
    pub response_text: String,
    pub phase: Phase,
    pub is_submitting: bool,
    pub notice: Option<Notice>,
    /// Debounce timers are armed for a revision and ignored once it moves on.
    pub input_revision: u64,
    next_notice_id: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the transition table for `trigger` and apply the result.
    pub(crate) fn apply(&mut self, trigger: Trigger) {
        let Some(next) = transition(self.phase, trigger) else {
            debug!("{:?} ignored in phase {:?}", trigger, self.phase);
            return;
        };

        if next == Phase::Response && self.response_text.is_empty() {
            warn!("Refusing to enter Response with an empty response text");
            return;
        }

        if next != self.phase {
            debug!("Phase {:?} -> {:?} on {:?}", self.phase, next, trigger);
        }
        self.phase = next;
    }

    /// Replace the current notice and return its id.
    pub(crate) fn raise_notice(&mut self, message: impl Into<String>) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.notice = Some(Notice {
            id,
            message: message.into(),
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new_defaults() {
        let session = ChatSession::new();
        assert_eq!(session.phase, Phase::Idle);
        assert!(session.input_text.is_empty());
        assert!(session.response_text.is_empty());
        assert!(!session.is_submitting);
        assert!(session.notice.is_none());
        assert_eq!(session.input_revision, 0);
    }

    #[test]
    fn test_apply_refuses_empty_response() {
        let mut session = ChatSession::new();
        session.phase = Phase::Processing;
        session.apply(Trigger::ResponseAvailable);
        assert_eq!(session.phase, Phase::Processing);

        session.response_text = "hi".to_string();
        session.apply(Trigger::ResponseAvailable);
        assert_eq!(session.phase, Phase::Response);
    }

    #[test]
    fn test_apply_ignores_inapplicable_trigger() {
        let mut session = ChatSession::new();
        session.apply(Trigger::DisplayComplete);
        assert_eq!(session.phase, Phase::Idle);
    }

    #[test]
    fn test_raise_notice_assigns_fresh_ids() {
        let mut session = ChatSession::new();
        let first = session.raise_notice("one");
        let second = session.raise_notice("two");
        assert_ne!(first, second);
        assert_eq!(
            session.notice,
            Some(Notice {
                id: second,
                message: "two".to_string()
            })
        );
    }
}
