pub mod course;
pub mod courses;
pub mod deck;
pub mod decks;
pub mod featured;
pub mod quiz;
pub mod quizzes;

use std::path::Path;

use anyhow::Result;
use studyhub_client::HttpCatalogApi;

use crate::config::{load_config_from, StudyhubConfig};

/// Load config and build the API client every command shares.
pub(crate) fn connect(config_path: Option<&Path>) -> Result<(StudyhubConfig, HttpCatalogApi)> {
    let config = load_config_from(config_path)?;
    let api = HttpCatalogApi::new(&config.api_url, config.token.clone());
    Ok((config, api))
}
