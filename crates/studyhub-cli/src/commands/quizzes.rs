//! The `studyhub quizzes` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use studyhub_core::api::CatalogApi;
use studyhub_core::catalog::quizzes_by_difficulty;
use studyhub_core::display::difficulty_meter;

pub async fn execute(difficulty: Option<u8>, config_path: Option<PathBuf>) -> Result<()> {
    let (_config, api) = super::connect(config_path.as_deref())?;
    let quizzes = api.list_quizzes().await?;
    let quizzes = quizzes_by_difficulty(&quizzes, difficulty);

    if quizzes.is_empty() {
        println!("No quizzes available.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Id", "Title", "Difficulty", "Questions"]);
    for quiz in &quizzes {
        table.add_row(vec![
            Cell::new(&quiz.id),
            Cell::new(&quiz.title),
            Cell::new(difficulty_meter(quiz.difficulty)),
            Cell::new(quiz.questions.len().to_string()),
        ]);
    }

    println!("{table}");
    Ok(())
}
