//! # Chat Phase
//!
//! The phase is the one piece of UI state that other affordances key off:
//! the status line text, the spinner, whether the response panel animates.
//!
//! Two independent things used to be able to set it (the submit handler and
//! the arrival of a response). Here every change goes through a single
//! transition table, so the order in which they fire is explicit.
//!
//! ```text
//!            input change               quiet period
//!   Idle ─────────────────► Typing ───────────────────► Idle
//!    ▲                        │
//!    │                        │ submit (non-empty)
//!    │ display complete       ▼
//! Response ◄──────────── Processing
//!            reply available
//! ```

/// Enumerated UI state of the chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Typing,
    Processing,
    Response,
}

impl Phase {
    /// Status line text shown above the input box.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "I'm ready when you are",
            Phase::Typing => "Typing...",
            Phase::Processing => "Let me think about it",
            Phase::Response => "Responding",
        }
    }
}

/// Something that happened which may move the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    InputChanged,
    /// The debounce window elapsed with no further input.
    QuietPeriod,
    SubmitAccepted,
    ResponseAvailable,
    DisplayComplete,
    ResponseFailed,
}

/// The transition table. `None` means the trigger does not apply in `from`.
pub fn transition(from: Phase, trigger: Trigger) -> Option<Phase> {
    use Phase::*;
    match (from, trigger) {
        (_, Trigger::InputChanged) => Some(Typing),
        (Typing, Trigger::QuietPeriod) => Some(Idle),
        (_, Trigger::SubmitAccepted) => Some(Processing),
        (_, Trigger::ResponseAvailable) => Some(Response),
        (Response, Trigger::DisplayComplete) => Some(Idle),
        (Processing, Trigger::ResponseFailed) => Some(Idle),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Phase; 4] = [Phase::Idle, Phase::Typing, Phase::Processing, Phase::Response];

    #[test]
    fn test_initial_phase_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn test_input_change_always_types() {
        for phase in ALL {
            assert_eq!(transition(phase, Trigger::InputChanged), Some(Phase::Typing));
        }
    }

    #[test]
    fn test_quiet_period_only_leaves_typing() {
        assert_eq!(transition(Phase::Typing, Trigger::QuietPeriod), Some(Phase::Idle));
        assert_eq!(transition(Phase::Idle, Trigger::QuietPeriod), None);
        assert_eq!(transition(Phase::Processing, Trigger::QuietPeriod), None);
        assert_eq!(transition(Phase::Response, Trigger::QuietPeriod), None);
    }

    #[test]
    fn test_submit_from_any_phase_processes() {
        for phase in ALL {
            assert_eq!(
                transition(phase, Trigger::SubmitAccepted),
                Some(Phase::Processing)
            );
        }
    }

    #[test]
    fn test_display_complete_only_leaves_response() {
        assert_eq!(
            transition(Phase::Response, Trigger::DisplayComplete),
            Some(Phase::Idle)
        );
        // A reveal that finishes after the user started typing again
        // must not stomp on the typing phase.
        assert_eq!(transition(Phase::Typing, Trigger::DisplayComplete), None);
        assert_eq!(transition(Phase::Processing, Trigger::DisplayComplete), None);
    }

    #[test]
    fn test_failure_only_leaves_processing() {
        assert_eq!(
            transition(Phase::Processing, Trigger::ResponseFailed),
            Some(Phase::Idle)
        );
        assert_eq!(transition(Phase::Typing, Trigger::ResponseFailed), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Phase::Idle.label(), "I'm ready when you are");
        assert_eq!(Phase::Typing.label(), "Typing...");
        assert_eq!(Phase::Processing.label(), "Let me think about it");
        assert_eq!(Phase::Response.label(), "Responding");
    }
}
