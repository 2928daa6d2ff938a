//! The `studyhub deck` command — interactive flashcard study on stdin.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{bail, Result};

use studyhub_core::api::CatalogApi;
use studyhub_core::flashcards::FlashcardSession;

pub async fn execute(id: String, config_path: Option<PathBuf>) -> Result<()> {
    let (_config, api) = super::connect(config_path.as_deref())?;
    let Some(deck) = api.get_deck(&id).await? else {
        bail!("deck not found: {id}");
    };

    let mut session = FlashcardSession::new(deck)?;
    let (_, total) = session.position();
    println!("{} ({total} cards)", session.deck_title());
    println!("Commands: f = flip, n = next, p = previous, q = quit\n");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let (index, total) = session.position();
        let card = session.current_card();
        if session.is_flipped() {
            println!("[{}/{total}] A: {}", index + 1, card.answer);
        } else {
            println!("[{}/{total}] Q: {}", index + 1, card.question);
        }

        let Some(line) = lines.next() else { break };
        match line?.trim() {
            "f" => session.flip(),
            "n" | "" => session.next(),
            "p" => session.previous(),
            "q" => break,
            _ => println!("Commands: f = flip, n = next, p = previous, q = quit"),
        }
    }

    Ok(())
}
