//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::state::ChatSession;
use crate::driver::{SessionDriver, Timing};
use crate::inference::{Responder, ResponderError, SimulatedResponder};

/// A responder that always fails, immediately.
pub struct FailingResponder;

#[async_trait]
impl Responder for FailingResponder {
    fn name(&self) -> &str {
        "failing"
    }

    async fn respond(&self, _input: &str) -> Result<String, ResponderError> {
        Err(ResponderError::Unavailable("test backend is down".to_string()))
    }
}

/// A session whose input was just changed to `text` (phase `Typing`).
pub fn typed_session(text: &str) -> ChatSession {
    let mut session = ChatSession::new();
    update(&mut session, Action::InputChanged(text.to_string()));
    session
}

/// A driver backed by the default simulated responder and default timing.
pub fn test_driver() -> SessionDriver {
    SessionDriver::new(Arc::new(SimulatedResponder::default()), Timing::default())
}
