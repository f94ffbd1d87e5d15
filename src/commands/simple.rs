//! Simple interactive CLI mode
//!
//! Line-based quiz without TUI. Drives the same controller as the TUI, one prompt per state.

use crate::controller::{Controller, Event, NextTarget, Outcome, Screen, ViewState};
use crate::core::Vocabulary;
use crate::game::GameSession;
use crate::output::formatters::{button_line, paint};
use crate::wordlists::{FetchError, WordSource, fetch_in_background};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// Returns the number of answers given.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: GameSession>(
    controller: &mut Controller<S>,
    source: &Arc<dyn WordSource>,
) -> Result<u32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_lines(controller, source, &mut stdin.lock(), &mut stdout.lock())
}

/// The quiz loop over arbitrary line input and text output
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_lines<S: GameSession, R: BufRead, W: Write>(
    controller: &mut Controller<S>,
    source: &Arc<dyn WordSource>,
    input: &mut R,
    out: &mut W,
) -> Result<u32> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Vocabulary Quiz - Simple Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Words from: {}", source.describe().bright_white())?;
    writeln!(out, "Pick answers by number, type translations, 'q' to quit.\n")?;

    loop {
        let screen = controller.screen();
        print_screen(out, &screen)?;

        let prompt = prompt_for(&screen);
        let Some(line) = read_line(input, out, prompt)? else {
            break;
        };

        let Some(event) = event_for(&screen, &line) else {
            if is_quit(&screen, &line) {
                break;
            }
            writeln!(out, "{}", "Not an option here".yellow())?;
            continue;
        };

        let event = if let Event::InputEdited(_) = &event {
            // A typed line is both the edit and the commit
            let _ = controller.handle(event);
            Event::InputCommitted
        } else {
            event
        };

        match controller.handle(event) {
            Outcome::Fetch => {
                let result = wait_for_fetch(fetch_in_background(Arc::clone(source)), source.as_ref());
                // Failures land on the idle screen
                let _ = controller.handle(Event::FetchSettled(result));
            }
            Outcome::Failed(err) => writeln!(out, "{}", format!("❌ {err}").red())?,
            Outcome::Ignored => writeln!(out, "{}", "Not an option here".yellow())?,
            Outcome::Updated => {}
        }
    }

    writeln!(out, "\n👋 Thanks for practising!\n")?;
    Ok(controller.counter())
}

/// Block on the fetch with a spinner
fn wait_for_fetch(
    rx: Receiver<Result<Vocabulary, FetchError>>,
    source: &dyn WordSource,
) -> Result<Vocabulary, FetchError> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Loading words from {}", source.describe()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = rx.recv().unwrap_or(Err(FetchError::Interrupted));
    spinner.finish_and_clear();
    result
}

fn print_screen<W: Write>(out: &mut W, screen: &Screen) -> io::Result<()> {
    match screen.view {
        ViewState::AwaitingStart => {
            if !screen.answer_label.is_empty() {
                writeln!(out, "{}", paint(&screen.answer_label, screen.answer_tone))?;
            }
            return Ok(());
        }
        ViewState::FetchInFlight => return Ok(()),
        ViewState::ChoiceActive | ViewState::InputActive | ViewState::AwaitingNext => {}
    }

    if screen.view != ViewState::AwaitingNext {
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(out, "#{} {}\n", screen.counter + 1, screen.task_label.bold())?;
    }

    if screen.choices_visible {
        for (slot, button) in screen.buttons.iter().enumerate() {
            if let Some(line) = button_line(slot, button) {
                writeln!(out, "{line}")?;
            }
        }
    }

    if screen.view == ViewState::AwaitingNext {
        if let Some(input) = &screen.input {
            writeln!(out, "  You typed: {}", paint(&input.text, input.tone))?;
        }
        writeln!(out, "\n{}", paint(&screen.answer_label, screen.answer_tone))?;
        if let Some(spelling) = &screen.spelling {
            writeln!(out, "Spelling: {}", spelling.cyan())?;
        }
    }
    writeln!(out)
}

const fn prompt_for(screen: &Screen) -> &'static str {
    match screen.view {
        ViewState::AwaitingStart | ViewState::FetchInFlight => "Press Enter to start",
        ViewState::ChoiceActive => "Your choice",
        ViewState::InputActive => "Your answer",
        ViewState::AwaitingNext => "Enter for next",
    }
}

fn is_quit(screen: &Screen, line: &str) -> bool {
    screen.view != ViewState::InputActive && matches!(line, "q" | "quit" | "exit")
}

/// The controller event a line of input stands for
fn event_for(screen: &Screen, line: &str) -> Option<Event> {
    match screen.view {
        ViewState::AwaitingStart | ViewState::FetchInFlight => {
            matches!(line, "" | "s" | "start").then_some(Event::Start)
        }
        ViewState::ChoiceActive => {
            if line.is_empty() {
                return screen
                    .next
                    .filter(|n| n.target == NextTarget::NextAction)
                    .map(|_| Event::NextPressed);
            }
            let number: usize = line.parse().ok()?;
            number.checked_sub(1).map(Event::AnswerChosen)
        }
        ViewState::InputActive => Some(Event::InputEdited(line.to_string())),
        ViewState::AwaitingNext => matches!(line, "" | "n" | "next").then_some(Event::NextPressed),
    }
}

/// Read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::InputCommit;
    use crate::controller::scripted::{ScriptedExercise, ScriptedSession};
    use crate::wordlists::EmbeddedSource;

    fn play(exercises: Vec<ScriptedExercise>, script: &str) -> (Controller<ScriptedSession>, String) {
        colored::control::set_override(false);
        let mut controller = Controller::new(ScriptedSession::new(exercises), InputCommit::Submit);
        let source: Arc<dyn WordSource> = Arc::new(EmbeddedSource);
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        let answered = run_lines(&mut controller, &source, &mut input, &mut out).unwrap();
        assert_eq!(answered, controller.counter());
        (controller, String::from_utf8(out).unwrap())
    }

    #[test]
    fn choice_round_trip() {
        let (controller, out) = play(
            vec![
                ScriptedExercise::choice("Select the German word", &["Hund", "Katze"], 1),
                ScriptedExercise::input("Translate", "der Zug"),
            ],
            "\n2\n\nder zug\nq\n",
        );
        assert_eq!(controller.counter(), 2);
        assert_eq!(controller.session().checked, vec![1]);
        assert_eq!(controller.session().checked_inputs, vec!["der zug".to_string()]);
        assert!(out.contains("[1] Hund"));
        assert!(out.contains("Correct!"));
        assert!(out.contains("Spelling: der Zug"));
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let (controller, out) = play(
            vec![ScriptedExercise::choice("Select", &["a", "b"], 0)],
            "\n4\n0\nabc\n",
        );
        assert_eq!(controller.counter(), 0);
        assert!(out.contains("Not an option here"));
    }

    #[test]
    fn q_is_an_answer_while_typing() {
        let (controller, _) = play(vec![ScriptedExercise::input("Translate", "quark")], "\nq\n");
        assert_eq!(controller.counter(), 1);
        assert_eq!(controller.session().checked_inputs, vec!["q".to_string()]);
    }

    #[test]
    fn failed_next_reports_and_stays() {
        let (controller, out) = play(vec![ScriptedExercise::choice("Select", &["a"], 0)], "\n1\n\n");
        assert_eq!(controller.counter(), 1);
        assert!(out.contains("No exercise could be created"));
        assert_eq!(controller.state().view_state(), ViewState::AwaitingNext);
    }

    #[test]
    fn end_of_input_quits() {
        let (controller, out) = play(Vec::new(), "");
        assert_eq!(controller.counter(), 0);
        assert!(out.contains("Thanks for practising"));
    }
}
