//! The `studyhub quiz` command — an interactive session on stdin.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{bail, Result};

use studyhub_core::api::CatalogApi;
use studyhub_core::quiz::QuizSession;
use studyhub_core::recommend::RecommendationResolver;

pub async fn execute(id: String, config_path: Option<PathBuf>) -> Result<()> {
    let (_config, api) = super::connect(config_path.as_deref())?;
    let Some(quiz) = api.get_quiz(&id).await? else {
        bail!("quiz not found: {id}");
    };

    let mut session = QuizSession::new(quiz)?;
    println!("{} ({} questions)\n", session.quiz_title(), session.question_count());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_finished() {
        // Unwrap is fine: the session always has a current question until
        // it is finished.
        let question = session.current_question().unwrap();
        println!(
            "Question {}/{}: {}",
            session.current_index() + 1,
            session.question_count(),
            question.text
        );
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        let choice = loop {
            let Some(line) = lines.next() else {
                bail!("input ended before the quiz finished");
            };
            match line?.trim().parse::<usize>() {
                Ok(n) if n >= 1 => break n - 1,
                _ => println!("Enter an option number."),
            }
        };

        if session.select_option(choice).is_err() {
            println!("No such option.\n");
            continue;
        }
        session.advance()?;
        println!();
    }

    // Unwraps are fine: both views are available once finished.
    let score = session.score().unwrap();
    println!("Score: {score}/{}", session.question_count());

    for review in session.review().unwrap() {
        if review.correct {
            println!("  ✓ {}", review.text);
        } else {
            println!("  ✗ {}", review.text);
            if let Some(chosen) = &review.chosen_option {
                println!("    you answered: {chosen}");
            }
            println!("    correct answer: {}", review.correct_option);
            if !review.explanation.is_empty() {
                println!("    {}", review.explanation);
            }
            for course in &review.related_courses {
                println!("    see: {} ({})", course.title, course.id);
            }
        }
    }

    let mut resolver = RecommendationResolver::new(session.quiz_id());
    let recommendations = resolver.resolve(&api).await;
    if !recommendations.is_empty() {
        println!("\nRecommended next:");
        for course in recommendations {
            println!("  {} ({})", course.title, course.id);
        }
    }

    Ok(())
}
