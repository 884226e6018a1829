//! Step views drawn over the particle backdrop.

pub mod questioning;
pub mod reveal;
pub mod selection;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use md_core::{Item, SessionPhase};
use md_deck::Card;

use crate::app::RitualApp;
use crate::backdrop;

/// Draw one frame: backdrop, title, the active step panel, status bar.
pub fn draw(frame: &mut Frame, app: &RitualApp) {
    let area = frame.area();
    backdrop::draw(frame, &app.field, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Panel
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" \u{2727} Mystic Deck ", Style::default().fg(Color::Yellow).bold()),
        Span::styled(app.phase().to_string(), Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(title, chunks[0]);

    let panel = panel_rect(chunks[1]);
    frame.render_widget(Clear, panel);
    match app.phase() {
        SessionPhase::Selecting => selection::draw(frame, app, panel),
        SessionPhase::Questioning => questioning::draw(frame, app, panel),
        SessionPhase::Revealing => reveal::draw(frame, app, panel),
    }

    let status_style = if app.source_error.is_some() {
        Style::default().fg(Color::White).bg(Color::Red)
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    };
    frame.render_widget(Paragraph::new(app.status_hint()).style(status_style), chunks[2]);
}

/// A framed panel block with the given title.
pub fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
}

/// Centered panel leaving some backdrop visible on every side.
fn panel_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(8).clamp(area.width.min(30), 72);
    let height = area.height.saturating_sub(4).min(18);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Card faces laid out five per row.
///
/// `highlight` marks one card; `face_down` decides which cards hide their face.
pub fn card_lines<'a>(
    items: &[&'a Item<Card>],
    highlight: Option<usize>,
    face_down: impl Fn(&Item<Card>) -> bool,
) -> Vec<Line<'a>> {
    items
        .chunks(5)
        .enumerate()
        .map(|(row, chunk)| {
            let spans: Vec<Span<'a>> = chunk
                .iter()
                .enumerate()
                .flat_map(|(col, item)| {
                    let index = row * 5 + col;
                    let mut style = card_style(&item.payload);
                    let text = if face_down(item) {
                        style = Style::default().fg(Color::Magenta);
                        " \u{2592}\u{2592}\u{2592} ".to_string()
                    } else {
                        format!(" {:<4}", item.payload.face())
                    };
                    if highlight == Some(index) {
                        style = style.reversed();
                    }
                    vec![Span::styled(text, style), Span::raw("  ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Red for hearts and diamonds, white otherwise.
pub fn card_style(card: &Card) -> Style {
    match card.parsed_suit() {
        Some(suit) if suit.is_red() => Style::default().fg(Color::Red).bold(),
        _ => Style::default().fg(Color::White).bold(),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use md_core::Answer;
    use md_deck::LocalDeck;

    use super::*;

    fn render(app: &RitualApp) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(80)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> RitualApp {
        let mut app = RitualApp::new(LocalDeck::new(3).into(), 3);
        app.fit_backdrop(80, 24);
        app
    }

    #[test]
    fn selection_view() {
        let app = app();
        let screen = render(&app);
        assert!(screen.contains("Mystic Deck"));
        assert!(screen.contains("20 cards"));
        assert!(screen.contains("Enter:begin"));
    }

    #[test]
    fn questioning_view() {
        let mut app = app();
        app.start();
        app.answer(Answer::Yes);
        let screen = render(&app);
        assert!(screen.contains("Question 2 of 5"));
        assert!(screen.contains("y:yes"));
    }

    #[test]
    fn reveal_view_found() {
        let mut app = app();
        let label = app.engine.items()[0].payload.label();
        app.start();
        for answer in [Answer::Yes, Answer::No, Answer::No, Answer::No, Answer::No] {
            app.answer(answer);
        }
        let screen = render(&app);
        assert!(screen.contains(&label));
    }

    #[test]
    fn reveal_view_not_found() {
        let mut app = app();
        app.start();
        for _ in 0..5 {
            app.answer(Answer::No);
        }
        let screen = render(&app);
        assert!(screen.contains("could not be found"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = app();
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
