//! # Core Application Logic
//!
//! This module contains Squid Master's chat-state logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ChatSession (state)  │
//!                    │  • Phase + transitions  │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                    ┌───────────▼─────────────┐
//!                    │  Driver (timers, calls  │
//!                    │  into the Responder)    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────▼─────────────┐
//!                    │   TUI adapter (ratatui) │
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ChatSession`, the single owned session record
//! - [`phase`]: `Phase` and the transition table
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod phase;
pub mod state;
