//! The exercise flow state machine

use super::screen::{self, ANSWER_SLOTS, Screen};
use super::state::{ChoiceRound, FlowState, GradedDetail, GradedRound, InputRound, NextTarget};
use crate::core::Vocabulary;
use crate::game::GameSession;
use crate::wordlists::FetchError;
use strum::{Display, EnumString};
use thiserror::Error;

/// What committing the text input (pressing Enter in it) stands for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InputCommit {
    /// Same as pressing Next/Submit: grade the typed answer
    #[default]
    Submit,
    /// Same as pressing Start: drop the exercise and fetch the vocabulary again
    Start,
}

/// User actions and asynchronous completions fed to the controller
#[derive(Debug)]
pub enum Event {
    Start,
    /// The vocabulary fetch requested by `Outcome::Fetch` has finished
    FetchSettled(Result<Vocabulary, FetchError>),
    /// Answer button pressed; the button number is the answer index
    AnswerChosen(usize),
    InputEdited(String),
    InputCommitted,
    NextPressed,
}

/// Failures reported back to the front end
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("{0}")]
    Fetch(String),
    #[error("No exercise could be created")]
    ExerciseUnavailable,
}

/// Result of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// State changed; redraw
    Updated,
    /// Event not applicable in the current state; nothing changed
    Ignored,
    /// State changed and the front end must start the vocabulary fetch, then
    /// deliver `Event::FetchSettled`
    Fetch,
    Failed(FlowError),
}

/// Exercise flow controller
///
/// One instance per quiz run. Owns the session and the answer counter.
pub struct Controller<S> {
    state: FlowState,
    session: S,
    counter: u32,
    commit: InputCommit,
}

impl<S: GameSession> Controller<S> {
    #[must_use]
    pub fn new(session: S, commit: InputCommit) -> Self {
        Self {
            state: FlowState::default(),
            session,
            counter: 0,
            commit,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &FlowState {
        &self.state
    }

    /// Number of answers graded so far
    #[must_use]
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    #[must_use]
    pub const fn session(&self) -> &S {
        &self.session
    }

    #[must_use]
    pub const fn commit(&self) -> InputCommit {
        self.commit
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        screen::render(&self.state, self.counter)
    }

    /// Dispatch one event
    pub fn handle(&mut self, event: Event) -> Outcome {
        let view = self.state.view_state();
        let outcome = match event {
            Event::Start => self.start(),
            Event::FetchSettled(result) => self.fetch_settled(result),
            Event::AnswerChosen(index) => self.answer_chosen(index),
            Event::InputEdited(text) => self.input_edited(text),
            Event::InputCommitted => self.input_committed(),
            Event::NextPressed => self.next_pressed(),
        };

        tracing::trace!(
            from = ?view,
            to = ?self.state.view_state(),
            ?outcome,
            counter = self.counter,
            "event handled"
        );
        outcome
    }

    fn start(&mut self) -> Outcome {
        match self.state {
            FlowState::Idle { .. } => self.restart(),
            FlowState::FetchInFlight => {
                tracing::warn!("start ignored, vocabulary fetch already in flight");
                Outcome::Ignored
            }
            _ => {
                tracing::debug!(state = ?self.state.view_state(), "start ignored, control hidden");
                Outcome::Ignored
            }
        }
    }

    /// Drop whatever is on screen and fetch the vocabulary again
    fn restart(&mut self) -> Outcome {
        self.state = FlowState::FetchInFlight;
        Outcome::Fetch
    }

    fn fetch_settled(&mut self, result: Result<Vocabulary, FetchError>) -> Outcome {
        if !matches!(self.state, FlowState::FetchInFlight) {
            tracing::debug!("stale fetch result dropped");
            return Outcome::Ignored;
        }

        let vocabulary = match result {
            Ok(vocabulary) => vocabulary,
            Err(err) => {
                let message = err.to_string();
                tracing::error!(error = %message, "vocabulary fetch failed");
                self.state = FlowState::Idle {
                    error: Some(message.clone()),
                };
                return Outcome::Failed(FlowError::Fetch(message));
            }
        };

        let words = self.session.load_words(vocabulary);
        tracing::info!(words, "session ready");

        if let Some(next) = self.present_exercise() {
            self.state = next;
            Outcome::Updated
        } else {
            tracing::error!(words, "no exercise could be created after fetch");
            let err = FlowError::ExerciseUnavailable;
            self.state = FlowState::Idle {
                error: Some(err.to_string()),
            };
            Outcome::Failed(err)
        }
    }

    fn answer_chosen(&mut self, index: usize) -> Outcome {
        let FlowState::Choice(round) = &self.state else {
            tracing::debug!(index, "answer ignored, no choice exercise active");
            return Outcome::Ignored;
        };
        if index >= round.answers.len() {
            tracing::debug!(index, "answer ignored, button disabled");
            return Outcome::Ignored;
        }
        let task = round.task.clone();
        let answers = round.answers.clone();

        let correct = self.session.check_answer(index);
        let message = self.result_message(correct);
        self.counter += 1;

        self.state = FlowState::AwaitingNext(GradedRound {
            task,
            correct,
            message,
            detail: GradedDetail::Choice {
                answers,
                picked: index,
            },
        });
        Outcome::Updated
    }

    fn input_edited(&mut self, text: String) -> Outcome {
        match &mut self.state {
            FlowState::Input(round) => {
                round.draft = text;
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    fn input_committed(&mut self) -> Outcome {
        if !matches!(self.state, FlowState::Input(_)) {
            return Outcome::Ignored;
        }
        match self.commit {
            InputCommit::Submit => self.next_pressed(),
            InputCommit::Start => self.restart(),
        }
    }

    fn next_pressed(&mut self) -> Outcome {
        match self.state.next_target() {
            Some(NextTarget::SubmitAnswer) => self.submit(),
            Some(NextTarget::NextAction) => self.advance(),
            None => Outcome::Ignored,
        }
    }

    fn submit(&mut self) -> Outcome {
        let FlowState::Input(round) = &self.state else {
            return Outcome::Ignored;
        };
        let task = round.task.clone();
        let submitted = round.draft.clone();

        let correct = self.session.check_answer_input(&submitted);
        let message = self.result_message(correct);
        let spelling = self.session.correct_spelling();
        self.counter += 1;

        self.state = FlowState::AwaitingNext(GradedRound {
            task,
            correct,
            message,
            detail: GradedDetail::Input {
                submitted,
                spelling,
            },
        });
        Outcome::Updated
    }

    /// Replace the current round with a new exercise, or keep everything as is
    fn advance(&mut self) -> Outcome {
        match self.present_exercise() {
            Some(next) => {
                self.state = next;
                Outcome::Updated
            }
            None => {
                tracing::error!(
                    state = ?self.state.view_state(),
                    "create_exercise failed, screen left unchanged"
                );
                Outcome::Failed(FlowError::ExerciseUnavailable)
            }
        }
    }

    /// Ask the session for a new exercise and build the matching round
    fn present_exercise(&mut self) -> Option<FlowState> {
        if !self.session.create_exercise() {
            return None;
        }
        let task = self.session.task();

        if self.session.is_exercise_input() {
            return Some(FlowState::Input(InputRound {
                task,
                draft: String::new(),
            }));
        }

        let mut answers = self.session.answers();
        if answers.len() > ANSWER_SLOTS {
            tracing::warn!(
                variants = answers.len(),
                "more answer variants than buttons, extra variants dropped"
            );
            answers.truncate(ANSWER_SLOTS);
        }
        Some(FlowState::Choice(ChoiceRound { task, answers }))
    }

    fn result_message(&self, correct: bool) -> String {
        if correct {
            self.session.correct_message()
        } else {
            self.session.incorrect_message()
        }
    }
}
