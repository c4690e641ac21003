pub mod latency;
pub mod responder;
pub mod responders;

pub use latency::LatencyPolicy;
pub use responder::{Responder, ResponderError};
pub use responders::SimulatedResponder;
