//! Formatting utilities for terminal output

use crate::controller::{ButtonView, Tone};
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Paint text in the colour of a tone
#[must_use]
pub fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Neutral => text.normal(),
        Tone::Success => text.green().bold(),
        Tone::Danger => text.red().bold(),
    }
}

/// One answer button as a numbered line, or `None` for a blank slot
#[must_use]
pub fn button_line(slot: usize, button: &ButtonView) -> Option<String> {
    if button.caption.is_empty() {
        return None;
    }
    let number = format!("[{}]", slot + 1);
    let number = if button.enabled {
        number.cyan()
    } else {
        number.bright_black()
    };
    Some(format!("  {number} {}", paint(&button.caption, button.tone)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn blank_button_has_no_line() {
        assert!(button_line(0, &ButtonView::default()).is_none());

        colored::control::set_override(false);
        let button = ButtonView {
            caption: "Hund".into(),
            tone: Tone::Success,
            enabled: false,
        };
        assert_eq!(button_line(2, &button).as_deref(), Some("  [3] Hund"));
    }
}
