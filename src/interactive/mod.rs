//! Interactive TUI mode
//!
//! Keyboard front end for the exercise flow controller.

mod app;
mod rendering;

pub use app::{Action, App, run_tui};
