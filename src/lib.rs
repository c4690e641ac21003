//! Squid Master library exports for testing

pub mod core;
pub mod driver;
pub mod inference;
pub mod tui;

#[cfg(test)]
pub mod test_support;
