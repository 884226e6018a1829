//! Windowed Mystic Deck ritual: macroquad entry point.
//!
//! Owns the app state and the active screen. Each frame the particle field
//! follows the window size, steps, and is drawn beneath the screen.

use std::path::PathBuf;

use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use md_deck::SourceOptions;
use md_gui::app::AppState;
use md_gui::backdrop::WindowSurface;
use md_gui::screen::{Screen, ScreenId, Transition, make_screen};

fn window_conf() -> Conf {
    Conf {
        window_title: "Mystic Deck".to_owned(),
        window_width: 1024,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

/// Value following `flag` on the command line.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

fn source_options(args: &[String]) -> SourceOptions {
    SourceOptions {
        deck_file: flag_value(args, "--deck-file").map(PathBuf::from),
        offline: args.iter().any(|a| a == "--offline"),
        seed: flag_value(args, "--seed").and_then(|s| s.parse().ok()),
        api_url: flag_value(args, "--api-url"),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args: --offline, --seed <n>, --deck-file <path>, --api-url <url>
    let args: Vec<String> = std::env::args().collect();
    let options = source_options(&args);
    let source = match options.build() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let seed = options.seed.unwrap_or(42);
    let mut app = AppState::new(source, seed, screen_width(), screen_height());
    let mut screen: Box<dyn Screen> = make_screen(ScreenId::for_phase(app.phase()));
    let mut surface = WindowSurface;

    loop {
        app.sync_window(screen_width(), screen_height());
        app.tick(get_time());
        app.field.render(&mut surface);

        match screen.update(&mut app) {
            Transition::Replace(id) => screen = make_screen(id),
            Transition::Quit => app.should_quit = true,
            Transition::None => {}
        }

        screen.draw(&app);

        if app.should_quit {
            break;
        }

        next_frame().await;
    }
}
