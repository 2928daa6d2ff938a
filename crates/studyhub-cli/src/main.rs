//! studyhub CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "studyhub", version, about = "Learning catalog, quizzes, and flashcards")]
struct Cli {
    /// Config file path (default: ./studyhub.toml, then ~/.config/studyhub/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the course catalog
    Courses {
        /// Filter by language ("all" for no filter)
        #[arg(long)]
        language: Option<String>,

        /// Filter by difficulty level 1-4
        #[arg(long)]
        difficulty: Option<String>,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Filter by type: course or challenge
        #[arg(long)]
        course_type: Option<String>,

        /// Sort order: date, popularity, difficulty, category
        #[arg(long, default_value = "date")]
        sort: String,
    },

    /// Show one course in detail
    Course {
        /// Course id
        id: String,

        /// Toggle your like on the course
        #[arg(long)]
        like: bool,

        /// Set your enrollment status: interested, planning, in-progress, completed
        #[arg(long)]
        set_status: Option<String>,
    },

    /// Show the featured courses feed
    Featured {
        /// Keep rotating through the feed until interrupted
        #[arg(long)]
        watch: bool,
    },

    /// List available quizzes
    Quizzes {
        /// Only quizzes at this difficulty level
        #[arg(long)]
        difficulty: Option<u8>,
    },

    /// Take a quiz interactively
    Quiz {
        /// Quiz id
        id: String,
    },

    /// List flashcard decks
    Decks,

    /// Study a flashcard deck interactively
    Deck {
        /// Deck id
        id: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("studyhub=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli.config;

    let result = match cli.command {
        Commands::Courses {
            language,
            difficulty,
            category,
            course_type,
            sort,
        } => {
            commands::courses::execute(
                language,
                difficulty,
                category,
                course_type,
                sort,
                config_path,
            )
            .await
        }
        Commands::Course {
            id,
            like,
            set_status,
        } => commands::course::execute(id, like, set_status, config_path).await,
        Commands::Featured { watch } => commands::featured::execute(watch, config_path).await,
        Commands::Quizzes { difficulty } => {
            commands::quizzes::execute(difficulty, config_path).await
        }
        Commands::Quiz { id } => commands::quiz::execute(id, config_path).await,
        Commands::Decks => commands::decks::execute(config_path).await,
        Commands::Deck { id } => commands::deck::execute(id, config_path).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
