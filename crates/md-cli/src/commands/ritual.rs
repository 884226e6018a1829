use std::io::{self, BufRead, Write};

use colored::Colorize;

use md_core::fate::{AWAITING_MESSAGE, NOT_FOUND_MESSAGE};
use md_core::{Answer, Item, Resolution, RitualEngine, SessionPhase};
use md_deck::{AnyDeckSource, Card, SourceOptions};

pub fn run(options: &SourceOptions) -> Result<(), String> {
    let source = super::open_source(options)?;
    let mut engine = super::new_engine();
    super::acquire(&mut engine, &source)?;

    println!("  {} Mystic Deck ritual", "Starting".bold());
    print_selection(&engine);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{}", prompt(engine.phase()));
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            println!("Farewell.");
            break;
        }

        match engine.phase() {
            SessionPhase::Selecting => start(&mut engine)?,
            SessionPhase::Questioning => answer(&mut engine, input)?,
            SessionPhase::Revealing => again(&mut engine, &source, input)?,
        }
    }

    Ok(())
}

fn start(engine: &mut RitualEngine<Card>) -> Result<(), String> {
    engine.begin_session().map_err(|e| e.to_string())?;
    print_question(engine);
    Ok(())
}

fn answer(engine: &mut RitualEngine<Card>, input: &str) -> Result<(), String> {
    let answer = match Answer::parse(input) {
        Ok(answer) => answer,
        Err(e) => {
            println!("{}\n", e.to_string().yellow());
            return Ok(());
        }
    };

    match engine.submit_answer(answer).map_err(|e| e.to_string())? {
        SessionPhase::Revealing => print_reveal(engine)?,
        _ => print_question(engine),
    }
    Ok(())
}

fn again(
    engine: &mut RitualEngine<Card>,
    source: &AnyDeckSource,
    input: &str,
) -> Result<(), String> {
    if !matches!(input.to_lowercase().as_str(), "again" | "a" | "reset" | "r") {
        println!("{}\n", "Type 'again' for a new ritual or 'quit' to leave.".yellow());
        return Ok(());
    }

    engine.reset();
    println!("{}\n", AWAITING_MESSAGE.italic());
    super::acquire(engine, source)?;
    print_selection(engine);
    Ok(())
}

fn prompt(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Selecting => "[Enter to begin] > ",
        SessionPhase::Questioning => "(y/n) > ",
        SessionPhase::Revealing => "[again/quit] > ",
    }
}

fn print_selection(engine: &RitualEngine<Card>) {
    println!("  {} cards are laid out before you:\n", engine.items().len());
    print_cards(engine.items().iter());
    println!("\n  Fix one card in your mind. Press Enter to begin, or 'quit' to leave.\n");
}

fn print_question(engine: &RitualEngine<Card>) {
    let candidates = engine.candidates_for_current_question();
    println!(
        "\n  {} Is your card among these {}?\n",
        format!(
            "Question {}/{}.",
            engine.current_question() + 1,
            engine.max_bits()
        )
        .bold(),
        candidates.len()
    );
    print_cards(candidates.into_iter());
    println!();
}

fn print_reveal(engine: &RitualEngine<Card>) -> Result<(), String> {
    let resolution = engine.resolve().map_err(|e| e.to_string())?;
    println!();
    match resolution {
        Resolution::Found(item) => {
            println!(
                "  {} {}",
                "Your card:".bold(),
                colored_label(&item.payload).bold()
            );
            println!("  {}", item.payload.fate().italic());
        }
        Resolution::NotFound { .. } => {
            println!("  {}", NOT_FOUND_MESSAGE.yellow());
        }
    }
    println!("\n  Type 'again' for a new ritual or 'quit' to leave.\n");
    Ok(())
}

fn print_cards<'a>(items: impl Iterator<Item = &'a Item<Card>>) {
    let faces: Vec<String> = items
        .map(|item| format!("{:<8}", item.payload.face()))
        .collect();
    for row in faces.chunks(5) {
        println!("    {}", row.join(" ").trim_end());
    }
}

fn colored_label(card: &Card) -> colored::ColoredString {
    match card.parsed_suit() {
        Some(suit) if suit.is_red() => card.label().red(),
        _ => card.label().normal(),
    }
}
