//! TUI rendering with ratatui
//!
//! Draws the `Screen` produced by the controller. Nothing here looks at flow state directly.

use super::app::App;
use crate::controller::{ButtonView, InputView, NextTarget, Screen, Tone, ViewState};
use crate::game::GameSession;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: GameSession>(f: &mut Frame, app: &App<S>) {
    let screen = app.controller.screen();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Task
            Constraint::Min(6),    // Answer controls
            Constraint::Length(4), // Verdict
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, &app.source_label, chunks[0]);
    render_task(f, &screen, chunks[1]);

    if screen.choices_visible {
        render_buttons(f, &screen.buttons, chunks[2]);
    } else if let Some(input) = &screen.input {
        render_input(f, input, chunks[2]);
    } else {
        render_placeholder(f, &screen, chunks[2]);
    }

    render_verdict(f, &screen, chunks[3]);
    render_status(f, &screen, chunks[4]);
}

const fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::White,
        Tone::Success => Color::Green,
        Tone::Danger => Color::Red,
    }
}

fn render_header(f: &mut Frame, source: &str, area: Rect) {
    let header = Paragraph::new(format!("VOCABULARY QUIZ - {source}"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_task(f: &mut Frame, screen: &Screen, area: Rect) {
    let style = if screen.view == ViewState::FetchInFlight {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let task = Paragraph::new(screen.task_label.as_str())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Task ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(task, area);
}

fn render_buttons(f: &mut Frame, buttons: &[ButtonView], area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row_index, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);

        for (col_index, cell) in cells.iter().enumerate() {
            let slot = row_index * 2 + col_index;
            if let Some(button) = buttons.get(slot) {
                render_button(f, slot, button, *cell);
            }
        }
    }
}

fn render_button(f: &mut Frame, slot: usize, button: &ButtonView, area: Rect) {
    // Unused slots stay blank
    if button.caption.is_empty() {
        return;
    }

    let color = match button.tone {
        Tone::Neutral if !button.enabled => Color::DarkGray,
        tone => tone_color(tone),
    };
    let border = if button.tone == Tone::Neutral {
        BorderType::Plain
    } else {
        BorderType::Thick
    };

    let content = Line::from(vec![
        Span::styled(format!("{} ", slot + 1), Style::default().fg(Color::Cyan)),
        Span::styled(
            button.caption.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border)
                .style(Style::default().fg(color)),
        );
    f.render_widget(widget, area);
}

fn render_input(f: &mut Frame, input: &InputView, area: Rect) {
    let (title, color) = if input.editable {
        (" Type your answer | Enter to submit ", Color::Yellow)
    } else {
        (" Your answer ", tone_color(input.tone))
    };

    let mut text = input.text.clone();
    if input.editable {
        text.push('_');
    }

    let widget = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(widget, area);
}

fn render_placeholder(f: &mut Frame, screen: &Screen, area: Rect) {
    let text = if screen.start_visible {
        "Press Enter or 's' to start"
    } else {
        "Fetching words…"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_verdict(f: &mut Frame, screen: &Screen, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        screen.answer_label.as_str(),
        Style::default()
            .fg(tone_color(screen.answer_tone))
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(spelling) = &screen.spelling {
        lines.push(Line::from(vec![
            Span::raw("Spelling: "),
            Span::styled(spelling.as_str(), Style::default().fg(Color::Cyan)),
        ]));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Answer ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, screen: &Screen, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(35),
        ])
        .split(area);

    let mode = Paragraph::new(format!("State: {}", view_name(screen.view))).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let counter = Paragraph::new(format!("Answered: {}", screen.counter)).alignment(Alignment::Center);
    f.render_widget(counter, chunks[1]);

    let control = match screen.next {
        Some(next) => Paragraph::new(format!("[ {} ]", next.caption)).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None if screen.start_visible => Paragraph::new("[ Start ]").style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => Paragraph::new(""),
    };
    f.render_widget(control.alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new(help_text(screen))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

const fn view_name(view: ViewState) -> &'static str {
    match view {
        ViewState::AwaitingStart => "ready",
        ViewState::FetchInFlight => "loading",
        ViewState::ChoiceActive => "choose",
        ViewState::InputActive => "type",
        ViewState::AwaitingNext => "graded",
    }
}

fn help_text(screen: &Screen) -> &'static str {
    match (screen.view, screen.next.map(|n| n.target)) {
        (ViewState::AwaitingStart, _) => "Enter: Start | q: Quit",
        (ViewState::FetchInFlight, _) => "q: Quit",
        (ViewState::ChoiceActive, Some(NextTarget::NextAction)) => "Enter: Skip | q: Quit",
        (ViewState::ChoiceActive, _) => "1-4: Answer | q: Quit",
        (ViewState::InputActive, _) => "Enter/Tab: Submit | Esc: Quit",
        (ViewState::AwaitingNext, _) => "Enter/n: Next | q: Quit",
    }
}
