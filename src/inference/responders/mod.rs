mod simulated;

pub use simulated::SimulatedResponder;
