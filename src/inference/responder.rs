use std::fmt;

use async_trait::async_trait;

/// Errors a responder can report. The session treats every variant the
/// same way (notice + back to idle); the split is for the log.
#[derive(Debug)]
pub enum ResponderError {
    /// The backend could not be reached or is not configured.
    Unavailable(String),
    /// The backend was reached but could not produce a reply.
    Failed(String),
}

impl fmt::Display for ResponderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponderError::Unavailable(msg) => write!(f, "responder unavailable: {msg}"),
            ResponderError::Failed(msg) => write!(f, "responder failed: {msg}"),
        }
    }
}

impl std::error::Error for ResponderError {}

/// The backend the chat screen talks to.
///
/// Today this is always the simulated echo. A real model call slots in by
/// implementing this trait; the session and its state machine don't change.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Returns the name of the responder (for logs).
    fn name(&self) -> &str;

    /// Produce a reply to `input`. May take arbitrarily long.
    async fn respond(&self, input: &str) -> Result<String, ResponderError>;
}
