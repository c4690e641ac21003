//! Simulated responder: waits a length-proportional delay, then echoes.
//!
//! Stands in for a real model call. The wait is the only "work".

use async_trait::async_trait;
use log::debug;

use crate::inference::{LatencyPolicy, Responder, ResponderError};

pub struct SimulatedResponder {
    latency: LatencyPolicy,
}

impl SimulatedResponder {
    pub fn new(latency: LatencyPolicy) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> LatencyPolicy {
        self.latency
    }
}

impl Default for SimulatedResponder {
    fn default() -> Self {
        Self::new(LatencyPolicy::default())
    }
}

#[async_trait]
impl Responder for SimulatedResponder {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn respond(&self, input: &str) -> Result<String, ResponderError> {
        let delay = self.latency.latency_for(input);
        debug!(
            "Simulating {}ms of thinking for {} chars",
            delay.as_millis(),
            input.chars().count()
        );
        tokio::time::sleep(delay).await;
        Ok(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio_test::{assert_pending, assert_ready};

    #[tokio::test(start_paused = true)]
    async fn test_echoes_after_latency() {
        let responder = SimulatedResponder::default();
        let mut reply = tokio_test::task::spawn(responder.respond("hello"));

        assert_pending!(reply.poll());

        tokio::time::advance(Duration::from_millis(249)).await;
        assert_pending!(reply.poll());

        tokio::time::advance(Duration::from_millis(1)).await;
        let result = assert_ready!(reply.poll());
        assert_eq!(result.unwrap(), "hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_long_input_waits_the_cap() {
        let responder = SimulatedResponder::default();
        let input = "y".repeat(100);
        let start = tokio::time::Instant::now();

        let reply = responder.respond(&input).await.unwrap();

        assert_eq!(reply, input);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(3000));
        assert!(elapsed < Duration::from_millis(3005));
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_is_echoed_verbatim() {
        let responder = SimulatedResponder::default();
        let reply = responder.respond("  spaced out \n").await.unwrap();
        assert_eq!(reply, "  spaced out \n");
    }

    #[test]
    fn test_name() {
        assert_eq!(SimulatedResponder::default().name(), "simulated");
    }
}
