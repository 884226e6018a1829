//! Reveal step.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::RitualApp;

use super::{card_style, panel_block};

/// Draw the revealed card and its fate, or the miss message.
pub fn draw(frame: &mut Frame, app: &RitualApp, area: Rect) {
    let block = panel_block("The Reveal");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    match app.revealed() {
        Some(item) => {
            let style = card_style(&item.payload);
            lines.push(
                Line::from(Span::styled(format!("[ {} ]", item.payload.face()), style))
                    .centered(),
            );
            lines.push(Line::from(""));
            lines.push(
                Line::from(vec![
                    Span::raw("Your card: "),
                    Span::styled(item.payload.label(), style),
                ])
                .centered(),
            );
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(
                    app.fate_message(),
                    Style::default().fg(Color::Yellow).italic(),
                ))
                .centered(),
            );
        }
        None => {
            lines.push(
                Line::from(Span::styled(
                    app.fate_message(),
                    Style::default().fg(Color::Yellow),
                ))
                .centered(),
            );
        }
    }
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            format!("answers: {:05b}", app.engine.answer_bitmask()),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    );

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
