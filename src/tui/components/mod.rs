//! # TUI Components
//!
//! UI components for the Squid Master card.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `Header`: title, tagline, phase status line
//! - `NoticeOverlay`: transient toast
//! - `ResponsePanel`: one render pass of the response view
//!
//! ### Stateful Components
//!
//! Components that keep presentation state between frames:
//! - `InputBox`: text buffer and cursor, emits `InputEvent`s
//! - `SubmitButton`: remembers where it was drawn for click hit testing
//! - `ResponseView`: typewriter progress
//!
//! Components receive external data as props, never by reaching into the
//! session. The draw function in `ui.rs` is the only place that reads
//! `ChatSession` and hands values down.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── header.rs         (title, tagline, status)
//! ├── input_box/        (text input, cursor, wrapping)
//! ├── submit_button.rs  (button + spinner)
//! ├── response_view.rs  (typewriter panel)
//! └── notice.rs         (toast overlay)
//! ```

pub mod header;
pub mod input_box;
pub mod notice;
pub mod response_view;
pub mod submit_button;

pub use header::Header;
pub use input_box::{InputBox, InputEvent};
pub use notice::NoticeOverlay;
pub use response_view::ResponseView;
pub use submit_button::SubmitButton;
