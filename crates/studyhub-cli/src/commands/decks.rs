//! The `studyhub decks` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use studyhub_core::api::CatalogApi;
use studyhub_core::catalog::decks_by_difficulty;
use studyhub_core::display::difficulty_meter;

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (_config, api) = super::connect(config_path.as_deref())?;
    let decks = api.list_decks().await?;
    let decks = decks_by_difficulty(&decks);

    if decks.is_empty() {
        println!("No flashcard decks available.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Id", "Title", "Difficulty", "Cards"]);
    for deck in &decks {
        table.add_row(vec![
            Cell::new(&deck.id),
            Cell::new(&deck.title),
            Cell::new(difficulty_meter(deck.difficulty)),
            Cell::new(deck.cards.len().to_string()),
        ]);
    }

    println!("{table}");
    Ok(())
}
