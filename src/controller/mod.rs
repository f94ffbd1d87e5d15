//! Exercise flow controller
//!
//! Drives one exercise at a time through `start → answer → next`. The controller owns
//! the game session and the answer counter; every user action enters through
//! [`Controller::handle`]. What the user sees is computed separately by
//! [`screen::render`] from the controller's state alone.

mod machine;
pub mod screen;
mod state;

#[cfg(test)]
pub(crate) mod scripted;

pub use machine::{Controller, Event, FlowError, InputCommit, Outcome};
pub use screen::{ANSWER_SLOTS, ButtonView, InputView, NextView, Screen, Tone};
pub use state::{ChoiceRound, FlowState, GradedDetail, GradedRound, InputRound, NextTarget, ViewState};
