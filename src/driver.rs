//! # Session Driver
//!
//! Owns the `ChatSession` and carries out the effects `update()` asks for.
//! Timers and responder calls run as tokio tasks; they never touch the
//! session directly, they send an `Action` back through the channel and the
//! owner of the driver dispatches it.
//!
//! ```text
//!  dispatch(action) ──► update() ──► Effect ──► spawn timer / responder
//!        ▲                                              │
//!        └──────────── try_next() / next_action() ◄─────┘
//! ```
//!
//! The idle debounce is cancelled and re-armed on every input change.
//! A responder call is never cancelled once started.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::ChatSession;
use crate::inference::Responder;

/// Timer settings the driver needs.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub idle_timeout: Duration,
    pub notice_duration: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_millis(crate::core::config::DEFAULT_IDLE_TIMEOUT_MS),
            notice_duration: Duration::from_millis(
                crate::core::config::DEFAULT_NOTICE_DURATION_MS,
            ),
        }
    }
}

impl From<&ResolvedConfig> for Timing {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            idle_timeout: config.idle_timeout,
            notice_duration: config.notice_duration,
        }
    }
}

pub struct SessionDriver {
    session: ChatSession,
    responder: Arc<dyn Responder>,
    timing: Timing,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
    idle_timer: Option<AbortHandle>,
    notice_timer: Option<AbortHandle>,
}

impl SessionDriver {
    pub fn new(responder: Arc<dyn Responder>, timing: Timing) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            session: ChatSession::new(),
            responder,
            timing,
            tx,
            rx,
            idle_timer: None,
            notice_timer: None,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Apply `action`, run whatever it schedules, and hand the effect back
    /// so the caller can react to the presentation ones (`RevealResponse`,
    /// `Quit`).
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        debug!("Dispatching {:?}", action);
        let effect = update(&mut self.session, action);

        match &effect {
            Effect::ScheduleIdleCheck { revision } => self.arm_idle_timer(*revision),
            Effect::RequestResponse { input } => self.spawn_response(input.clone()),
            Effect::ScheduleNoticeDismiss { id } => self.arm_notice_timer(*id),
            Effect::RevealResponse(_) | Effect::Quit | Effect::None => {}
        }

        effect
    }

    /// Next action produced by a timer or the responder, without waiting.
    pub fn try_next(&mut self) -> Option<Action> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next action produced by a timer or the responder.
    pub async fn next_action(&mut self) -> Option<Action> {
        self.rx.recv().await
    }

    fn arm_idle_timer(&mut self, revision: u64) {
        if let Some(previous) = self.idle_timer.take() {
            previous.abort();
        }
        let tx = self.tx.clone();
        let delay = self.timing.idle_timeout;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Action::IdleTimeout { revision }).is_err() {
                warn!("Failed to send IdleTimeout: receiver dropped");
            }
        });
        self.idle_timer = Some(handle.abort_handle());
    }

    fn arm_notice_timer(&mut self, id: u64) {
        if let Some(previous) = self.notice_timer.take() {
            previous.abort();
        }
        let tx = self.tx.clone();
        let delay = self.timing.notice_duration;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Action::DismissNotice { id }).is_err() {
                warn!("Failed to send DismissNotice: receiver dropped");
            }
        });
        self.notice_timer = Some(handle.abort_handle());
    }

    fn spawn_response(&self, input: String) {
        let responder = self.responder.clone();
        let tx = self.tx.clone();
        info!(
            "Spawning {} responder for {} chars",
            responder.name(),
            input.chars().count()
        );
        tokio::spawn(async move {
            let action = match responder.respond(&input).await {
                Ok(reply) => {
                    info!("Responder replied with {} chars", reply.chars().count());
                    Action::ResponseReady(reply)
                }
                Err(e) => Action::ResponseFailed(e.to_string()),
            };
            if tx.send(action).is_err() {
                warn!("Failed to send responder result: receiver dropped");
            }
        });
    }
}
