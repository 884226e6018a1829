//! Selection step: the pool laid out face up.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use md_core::Item;
use md_deck::Card;

use crate::app::RitualApp;

use super::{card_lines, panel_block};

/// Draw the selection panel.
pub fn draw(frame: &mut Frame, app: &RitualApp, area: Rect) {
    let block = panel_block("Choose a card");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<&Item<Card>> = app.engine.items().iter().collect();
    let mut lines = Vec::new();

    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            "No cards could be drawn.",
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from("Press r to try again."));
    } else {
        lines.push(Line::from(Span::styled(
            format!("{} cards are laid out before you.", items.len()),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
        lines.extend(card_lines(&items, Some(app.highlight), |item| {
            app.is_flipped(item)
        }));
        lines.push(Line::from(""));
        if let Some(item) = items.get(app.highlight) {
            let label = if app.is_flipped(item) {
                "(face down)".to_string()
            } else {
                item.payload.label()
            };
            lines.push(Line::from(Span::styled(
                label,
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(
            "Fix one card in your mind, then press Enter to begin.",
        ));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
