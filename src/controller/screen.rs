//! Screen model
//!
//! `render` maps a controller state to a description of every control on screen.
//! Front ends draw a `Screen` and never inspect `FlowState` themselves.

use super::state::{FlowState, GradedDetail, GradedRound, NextTarget, ViewState};

/// Number of answer buttons
pub const ANSWER_SLOTS: usize = 4;

/// Visual class of a control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Danger,
}

impl Tone {
    #[must_use]
    pub const fn from_correct(correct: bool) -> Self {
        if correct { Self::Success } else { Self::Danger }
    }
}

/// One answer button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonView {
    /// Empty for unused slots
    pub caption: String,
    pub tone: Tone,
    pub enabled: bool,
}

/// The text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub text: String,
    pub tone: Tone,
    /// Editable and focused while an answer is pending
    pub editable: bool,
}

/// The shared Next/Submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextView {
    pub caption: &'static str,
    pub target: NextTarget,
}

impl NextView {
    const fn for_target(target: NextTarget) -> Self {
        let caption = match target {
            NextTarget::SubmitAnswer => "Submit",
            NextTarget::NextAction => "Next",
        };
        Self { caption, target }
    }
}

/// Everything a front end needs to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub view: ViewState,
    pub task_label: String,
    pub answer_label: String,
    pub answer_tone: Tone,
    /// Canonical spelling, shown after a typed answer is graded
    pub spelling: Option<String>,
    /// Visibility of the answer button group
    pub choices_visible: bool,
    pub buttons: [ButtonView; ANSWER_SLOTS],
    /// `None` while the input is hidden
    pub input: Option<InputView>,
    pub start_visible: bool,
    /// `None` while the Next/Submit control is hidden
    pub next: Option<NextView>,
    pub counter: u32,
}

impl Screen {
    fn blank(view: ViewState, counter: u32) -> Self {
        Self {
            view,
            task_label: String::new(),
            answer_label: String::new(),
            answer_tone: Tone::Neutral,
            spelling: None,
            choices_visible: false,
            buttons: Default::default(),
            input: None,
            start_visible: false,
            next: None,
            counter,
        }
    }

    /// Number of answer buttons that accept a click
    #[must_use]
    pub fn enabled_buttons(&self) -> usize {
        self.buttons.iter().filter(|b| b.enabled).count()
    }
}

/// Map a controller state to its screen
#[must_use]
pub fn render(state: &FlowState, counter: u32) -> Screen {
    let mut screen = Screen::blank(state.view_state(), counter);
    screen.next = state.next_target().map(NextView::for_target);

    match state {
        FlowState::Idle { error } => {
            screen.task_label = "Press Start to begin".to_string();
            screen.start_visible = true;
            if let Some(message) = error {
                screen.answer_label.clone_from(message);
                screen.answer_tone = Tone::Danger;
            }
        }
        FlowState::FetchInFlight => {
            screen.task_label = "Loading…".to_string();
        }
        FlowState::Choice(round) => {
            screen.task_label.clone_from(&round.task);
            screen.choices_visible = true;
            screen.buttons = std::array::from_fn(|i| match round.answers.get(i) {
                Some(caption) => ButtonView {
                    caption: caption.clone(),
                    tone: Tone::Neutral,
                    enabled: true,
                },
                None => ButtonView::default(),
            });
        }
        FlowState::Input(round) => {
            screen.task_label.clone_from(&round.task);
            screen.input = Some(InputView {
                text: round.draft.clone(),
                tone: Tone::Neutral,
                editable: true,
            });
        }
        FlowState::AwaitingNext(graded) => render_graded(&mut screen, graded),
    }

    screen
}

fn render_graded(screen: &mut Screen, graded: &GradedRound) {
    let tone = Tone::from_correct(graded.correct);
    screen.task_label.clone_from(&graded.task);
    screen.answer_label.clone_from(&graded.message);
    screen.answer_tone = tone;

    match &graded.detail {
        GradedDetail::Choice { answers, picked } => {
            screen.choices_visible = true;
            screen.buttons = std::array::from_fn(|i| ButtonView {
                caption: answers.get(i).cloned().unwrap_or_default(),
                tone: if i == *picked { tone } else { Tone::Neutral },
                enabled: false,
            });
        }
        GradedDetail::Input {
            submitted,
            spelling,
        } => {
            screen.input = Some(InputView {
                text: submitted.clone(),
                tone,
                editable: false,
            });
            screen.spelling = Some(spelling.clone());
        }
    }
}
