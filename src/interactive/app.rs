//! TUI application state and event loop

use crate::controller::{Controller, Event, FlowState, Outcome, ViewState};
use crate::core::Vocabulary;
use crate::game::GameSession;
use crate::wordlists::{FetchError, WordSource, fetch_in_background};
use anyhow::Result;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

/// How long the loop waits for a key before checking on the fetch again
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a key press means
#[derive(Debug)]
pub enum Action {
    Quit,
    Flow(Event),
}

/// Application state
pub struct App<S> {
    pub controller: Controller<S>,
    pub source_label: String,
    pub should_quit: bool,
    source: Arc<dyn WordSource>,
    pending: Option<Receiver<Result<Vocabulary, FetchError>>>,
}

impl<S: GameSession> App<S> {
    #[must_use]
    pub fn new(controller: Controller<S>, source: Arc<dyn WordSource>) -> Self {
        Self {
            controller,
            source_label: source.describe(),
            should_quit: false,
            source,
            pending: None,
        }
    }

    /// Whether a vocabulary fetch is running
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed an event to the controller and carry out what it asks for
    pub fn dispatch(&mut self, event: Event) {
        match self.controller.handle(event) {
            Outcome::Fetch => {
                self.pending = Some(fetch_in_background(Arc::clone(&self.source)));
            }
            // Already logged by the controller; the screen shows what is left to see
            Outcome::Failed(_) | Outcome::Updated | Outcome::Ignored => {}
        }
    }

    /// Deliver the fetch result once the worker has finished
    pub fn poll_fetch(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(FetchError::Interrupted),
        };
        self.pending = None;
        self.dispatch(Event::FetchSettled(result));
    }

    /// Translate a key press for the current state
    #[must_use]
    pub fn key_action(&self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }
        if key.code == KeyCode::Esc {
            return Some(Action::Quit);
        }

        let state = self.controller.state();
        if let FlowState::Input(round) = state {
            return match key.code {
                // Other chords are not text
                KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
                KeyCode::Char(c) => {
                    let mut draft = round.draft.clone();
                    draft.push(c);
                    Some(Action::Flow(Event::InputEdited(draft)))
                }
                KeyCode::Backspace => {
                    let mut draft = round.draft.clone();
                    draft.pop()?;
                    Some(Action::Flow(Event::InputEdited(draft)))
                }
                KeyCode::Enter => Some(Action::Flow(Event::InputCommitted)),
                // The Submit control itself, whatever Enter is bound to
                KeyCode::Tab => Some(Action::Flow(Event::NextPressed)),
                _ => None,
            };
        }

        match (state.view_state(), key.code) {
            (_, KeyCode::Char('q')) => Some(Action::Quit),
            (ViewState::AwaitingStart | ViewState::FetchInFlight, KeyCode::Enter | KeyCode::Char('s')) => {
                Some(Action::Flow(Event::Start))
            }
            (ViewState::ChoiceActive, KeyCode::Char(c @ '1'..='4')) => {
                let index = c.to_digit(10).map(|d| d as usize - 1)?;
                Some(Action::Flow(Event::AnswerChosen(index)))
            }
            (ViewState::ChoiceActive | ViewState::AwaitingNext, KeyCode::Enter | KeyCode::Char('n')) => {
                Some(Action::Flow(Event::NextPressed))
            }
            _ => None,
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: GameSession>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "quiz aborted");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: GameSession>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    tracing::info!(source = %app.source_label, "quiz started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        app.poll_fetch();

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let TermEvent::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.key_action(key) {
                Some(Action::Quit) => app.should_quit = true,
                Some(Action::Flow(event)) => app.dispatch(event),
                None => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(answers = app.controller.counter(), "quiz finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::InputCommit;
    use crate::controller::scripted::{ScriptedExercise, ScriptedSession};
    use crate::wordlists::EmbeddedSource;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(exercises: Vec<ScriptedExercise>) -> App<ScriptedSession> {
        let controller = Controller::new(ScriptedSession::new(exercises), InputCommit::Submit);
        App::new(controller, Arc::new(EmbeddedSource))
    }

    fn press(app: &mut App<ScriptedSession>, code: KeyCode) {
        match app.key_action(key(code)) {
            Some(Action::Flow(event)) => app.dispatch(event),
            Some(Action::Quit) => app.should_quit = true,
            None => {}
        }
    }

    fn wait_for_fetch(app: &mut App<ScriptedSession>) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.is_fetching() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
            app.poll_fetch();
        }
        assert!(!app.is_fetching(), "fetch did not finish");
    }

    #[test]
    fn enter_starts_and_fetch_completes() {
        let mut app = app(vec![ScriptedExercise::choice("task", &["a", "b"], 1)]);
        press(&mut app, KeyCode::Enter);
        assert!(app.is_fetching());
        assert_eq!(app.controller.state().view_state(), ViewState::FetchInFlight);

        // A second Enter during the fetch is rejected by the controller
        press(&mut app, KeyCode::Enter);

        wait_for_fetch(&mut app);
        assert_eq!(app.controller.state().view_state(), ViewState::ChoiceActive);
        assert_eq!(app.controller.session().loads, 1);
    }

    #[test]
    fn digits_pick_answers() {
        let mut app = app(vec![ScriptedExercise::choice("task", &["a", "b"], 1)]);
        press(&mut app, KeyCode::Enter);
        wait_for_fetch(&mut app);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.controller.counter(), 0);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.controller.counter(), 1);
        assert_eq!(app.controller.session().checked, vec![1]);
    }

    #[test]
    fn typing_edits_the_draft() {
        let mut app = app(vec![ScriptedExercise::input("task", "der Zug")]);
        press(&mut app, KeyCode::Enter);
        wait_for_fetch(&mut app);

        for c in "der Zuq".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(
            app.controller.screen().input.map(|i| i.text),
            Some("der Zug".to_string())
        );

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.counter(), 1);
        assert_eq!(app.controller.screen().answer_label, "Correct!");
    }

    #[test]
    fn q_types_in_input_but_quits_elsewhere() {
        let mut app = app(vec![ScriptedExercise::input("task", "quark")]);
        assert!(matches!(app.key_action(key(KeyCode::Char('q'))), Some(Action::Quit)));

        press(&mut app, KeyCode::Enter);
        wait_for_fetch(&mut app);
        assert!(matches!(
            app.key_action(key(KeyCode::Char('q'))),
            Some(Action::Flow(Event::InputEdited(_)))
        ));
        assert!(matches!(app.key_action(key(KeyCode::Esc)), Some(Action::Quit)));
    }

    #[test]
    fn backspace_on_empty_draft_does_nothing() {
        let mut app = app(vec![ScriptedExercise::input("task", "x")]);
        press(&mut app, KeyCode::Enter);
        wait_for_fetch(&mut app);
        assert!(app.key_action(key(KeyCode::Backspace)).is_none());
    }

    #[test]
    fn chords_do_not_type() {
        let mut app = app(vec![ScriptedExercise::input("task", "x")]);
        press(&mut app, KeyCode::Enter);
        wait_for_fetch(&mut app);

        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(app.key_action(alt_x).is_none());
        assert!(app.key_action(ctrl_u).is_none());

        let shift_x = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert!(matches!(
            app.key_action(shift_x),
            Some(Action::Flow(Event::InputEdited(draft))) if draft == "X"
        ));
    }

    #[test]
    fn ctrl_c_quits() {
        let app = app(Vec::new());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(app.key_action(ctrl_c), Some(Action::Quit)));
    }
}
