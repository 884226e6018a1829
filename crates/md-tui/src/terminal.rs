//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use md_core::{Answer, SessionPhase};

use crate::app::RitualApp;
use crate::views;

/// Time between backdrop frames.
const FRAME: Duration = Duration::from_millis(33);

/// Launch the TUI application.
pub fn run(mut app: RitualApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = terminal
        .size()
        .map_err(|e| format!("terminal error: {e}"))
        .and_then(|size| {
            app.fit_backdrop(size.width, size.height);
            run_loop(&mut terminal, &mut app)
        });

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop: redraw every frame, handle input between frames.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut RitualApp,
) -> Result<(), String> {
    let started = Instant::now();
    let mut last_frame = Instant::now();
    loop {
        terminal
            .draw(|frame| views::draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = FRAME.saturating_sub(last_frame.elapsed());
        if event::poll(timeout).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event);
        }

        if last_frame.elapsed() >= FRAME {
            app.tick(started.elapsed().as_secs_f64());
            last_frame = Instant::now();
        }
    }
}

/// Handle a crossterm event.
fn handle_event(app: &mut RitualApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Resize(columns, rows) => app.resize(columns, rows),
        _ => {}
    }
}

/// Handle keyboard input for the current step.
fn handle_key(app: &mut RitualApp, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('r') => {
            app.reset();
            return;
        }
        _ => {}
    }

    match app.phase() {
        SessionPhase::Selecting => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => app.start(),
            KeyCode::Left | KeyCode::Char('h') => app.move_highlight(-1),
            KeyCode::Right | KeyCode::Char('l') => app.move_highlight(1),
            KeyCode::Up | KeyCode::Char('k') => app.move_highlight(-5),
            KeyCode::Down | KeyCode::Char('j') => app.move_highlight(5),
            KeyCode::Char('f') | KeyCode::Char(' ') => app.flip_highlighted(),
            _ => {}
        },
        SessionPhase::Questioning => match key.code {
            KeyCode::Char('y') => app.answer(Answer::Yes),
            KeyCode::Char('n') => app.answer(Answer::No),
            _ => {}
        },
        SessionPhase::Revealing => {
            if key.code == KeyCode::Enter {
                app.reset();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use md_deck::LocalDeck;

    fn press(app: &mut RitualApp, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn keys_drive_a_full_ritual() {
        let mut app = RitualApp::new(LocalDeck::new(11).into(), 0);
        let expected = app.engine.items()[2].payload.clone(); // id 3
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.phase(), SessionPhase::Selecting);
        press(&mut app, KeyCode::Enter);
        for c in ['y', 'y', 'n', 'n', 'n'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.phase(), SessionPhase::Revealing);
        assert_eq!(app.revealed().map(|i| &i.payload), Some(&expected));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.phase(), SessionPhase::Selecting);
    }

    #[test]
    fn selection_keys() {
        let mut app = RitualApp::new(LocalDeck::new(11).into(), 0);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.highlight, 6);
        press(&mut app, KeyCode::Char('f'));
        assert!(app.is_flipped(&app.engine.items()[6]));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.phase(), SessionPhase::Questioning);
        assert!(app.flipped.is_empty());
    }

    #[test]
    fn quit_and_resize() {
        let mut app = RitualApp::new(LocalDeck::new(11).into(), 0);
        handle_event(&mut app, Event::Resize(50, 20));
        assert_eq!(app.field.bounds(), (100.0, 80.0));
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit);
    }
}
