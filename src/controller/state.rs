//! Controller states

/// What a press on the shared Next/Submit control does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextTarget {
    /// Grade the typed answer
    SubmitAnswer,
    /// Move on to a new exercise
    NextAction,
}

/// Coarse view state, one per controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    AwaitingStart,
    FetchInFlight,
    ChoiceActive,
    InputActive,
    AwaitingNext,
}

/// A multiple-choice exercise waiting for a click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRound {
    pub task: String,
    /// At most `ANSWER_SLOTS` variants, in button order
    pub answers: Vec<String>,
}

/// A typed-answer exercise waiting for a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRound {
    pub task: String,
    pub draft: String,
}

/// How a graded exercise was answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradedDetail {
    Choice { answers: Vec<String>, picked: usize },
    Input { submitted: String, spelling: String },
}

/// An answered exercise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedRound {
    pub task: String,
    pub correct: bool,
    pub message: String,
    pub detail: GradedDetail,
}

/// Full controller state
///
/// Carries everything the screen shows, so rendering never consults the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    /// Waiting for Start; `error` holds the last fetch or setup failure
    Idle { error: Option<String> },
    /// Vocabulary fetch running; further Starts are rejected
    FetchInFlight,
    Choice(ChoiceRound),
    Input(InputRound),
    AwaitingNext(GradedRound),
}

impl FlowState {
    #[must_use]
    pub const fn view_state(&self) -> ViewState {
        match self {
            Self::Idle { .. } => ViewState::AwaitingStart,
            Self::FetchInFlight => ViewState::FetchInFlight,
            Self::Choice(_) => ViewState::ChoiceActive,
            Self::Input(_) => ViewState::InputActive,
            Self::AwaitingNext(_) => ViewState::AwaitingNext,
        }
    }

    /// Target of the Next/Submit control, `None` while it is hidden
    ///
    /// A choice round without variants exposes Next as a skip so the flow cannot stall.
    #[must_use]
    pub fn next_target(&self) -> Option<NextTarget> {
        match self {
            Self::Input(_) => Some(NextTarget::SubmitAnswer),
            Self::AwaitingNext(_) => Some(NextTarget::NextAction),
            Self::Choice(round) if round.answers.is_empty() => Some(NextTarget::NextAction),
            Self::Idle { .. } | Self::FetchInFlight | Self::Choice(_) => None,
        }
    }
}

impl Default for FlowState {
    fn default() -> Self {
        Self::Idle { error: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_awaits_start() {
        let state = FlowState::default();
        assert_eq!(state.view_state(), ViewState::AwaitingStart);
        assert_eq!(state.next_target(), None);
    }

    #[test]
    fn next_target_follows_state() {
        let input = FlowState::Input(InputRound {
            task: "t".into(),
            draft: String::new(),
        });
        assert_eq!(input.next_target(), Some(NextTarget::SubmitAnswer));

        let choice = FlowState::Choice(ChoiceRound {
            task: "t".into(),
            answers: vec!["a".into()],
        });
        assert_eq!(choice.next_target(), None);

        let empty_choice = FlowState::Choice(ChoiceRound {
            task: "t".into(),
            answers: Vec::new(),
        });
        assert_eq!(empty_choice.next_target(), Some(NextTarget::NextAction));
    }
}
