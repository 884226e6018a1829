use comfy_table::{ContentArrangement, Table};

use md_deck::{DeckSource, DrawResponse, SourceOptions};

pub fn run(options: &SourceOptions, json: bool) -> Result<(), String> {
    let source = super::open_source(options)?;
    let mut engine = super::new_engine();
    super::acquire(&mut engine, &source)?;

    if json {
        let cards = engine.items().iter().map(|item| item.payload.clone()).collect();
        let body = serde_json::to_string_pretty(&DrawResponse::from_cards(cards))
            .map_err(|e| e.to_string())?;
        println!("{body}");
        return Ok(());
    }

    if engine.items().is_empty() {
        println!("  No cards drawn.");
        return Ok(());
    }

    let bits = engine.max_bits();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Bits", "Card", "Face", "Code"]);

    for item in engine.items() {
        table.add_row(vec![
            item.identifier.value().to_string(),
            item.identifier.pattern(bits),
            item.payload.label(),
            item.payload.face(),
            item.payload.code.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards from {}", engine.items().len(), source.describe());

    Ok(())
}
