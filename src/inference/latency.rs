//! Simulated latency: how long the fake backend "thinks" about an input.

use std::time::Duration;

pub const DEFAULT_PER_CHAR_LATENCY: Duration = Duration::from_millis(50);
pub const DEFAULT_MAX_LATENCY: Duration = Duration::from_millis(3000);

/// Latency proportional to input length, capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyPolicy {
    pub per_char: Duration,
    pub cap: Duration,
}

impl Default for LatencyPolicy {
    fn default() -> Self {
        Self {
            per_char: DEFAULT_PER_CHAR_LATENCY,
            cap: DEFAULT_MAX_LATENCY,
        }
    }
}

impl LatencyPolicy {
    /// `min(per_char * length, cap)`, length counted in chars (not bytes),
    /// whitespace included.
    pub fn latency_for(&self, input: &str) -> Duration {
        let len = u32::try_from(input.chars().count()).unwrap_or(u32::MAX);
        self.per_char.saturating_mul(len).min(self.cap)
    }
}
