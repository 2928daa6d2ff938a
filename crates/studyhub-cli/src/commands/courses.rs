//! The `studyhub courses` command.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use comfy_table::{Cell, Table};

use studyhub_core::catalog::{CatalogFilter, SortKey};
use studyhub_core::display::{difficulty_meter, status_badge};
use studyhub_core::store::CatalogStore;

pub async fn execute(
    language: Option<String>,
    difficulty: Option<String>,
    category: Option<String>,
    course_type: Option<String>,
    sort: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let sort: SortKey = sort.parse().map_err(|e: String| anyhow!(e))?;
    let (config, api) = super::connect(config_path.as_deref())?;

    let mut store = CatalogStore::new(config.user_id.clone());
    store.set_filter(CatalogFilter::from_selectors(
        language.as_deref(),
        difficulty.as_deref(),
        category.as_deref(),
        course_type.as_deref(),
    ));
    store.set_sort(sort);
    store.refresh(&api).await?;

    let courses = store.processed();
    if courses.is_empty() {
        println!("No courses match the current filter.");
        return Ok(());
    }

    let overlay = store.overlay();
    let mut table = Table::new();
    table.set_header(vec![
        "Title",
        "Provider",
        "Type",
        "Difficulty",
        "Likes",
        "Status",
        "Added",
    ]);

    for course in &courses {
        let status = overlay
            .get(&course.id)
            .map(|s| status_badge(*s).label.to_string())
            .unwrap_or_default();
        let added = course
            .created_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&course.title),
            Cell::new(&course.provider),
            Cell::new(course.course_type.to_string()),
            Cell::new(difficulty_meter(course.difficulty)),
            Cell::new(course.like_count().to_string()),
            Cell::new(status),
            Cell::new(added),
        ]);
    }

    println!("{table}");
    println!("{} courses (sorted by {sort})", courses.len());
    Ok(())
}
