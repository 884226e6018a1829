//! Questioning step: one bit per question.

use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph};

use crate::app::RitualApp;

use super::{card_lines, panel_block};

/// Draw the question panel with the current candidate group.
pub fn draw(frame: &mut Frame, app: &RitualApp, area: Rect) {
    let engine = &app.engine;
    let question = engine.current_question() + 1;
    let block = panel_block("The Questions");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(f64::from(engine.current_question()) / f64::from(engine.max_bits()))
        .label(format!("Question {question} of {}", engine.max_bits()));
    frame.render_widget(progress, chunks[0]);

    let candidates = engine.candidates_for_current_question();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Is your card among these {}?", candidates.len()),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
    ];
    lines.extend(card_lines(&candidates, None, |_| false));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("y", Style::default().fg(Color::Green).bold()),
        Span::raw(" yes   "),
        Span::styled("n", Style::default().fg(Color::Red).bold()),
        Span::raw(" no"),
    ]));

    frame.render_widget(Paragraph::new(lines), chunks[1]);
}
