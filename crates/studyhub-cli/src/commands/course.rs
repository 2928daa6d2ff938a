//! The `studyhub course` command.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

use studyhub_core::display::{difficulty_meter, status_badge};
use studyhub_core::model::EnrollmentStatus;
use studyhub_core::store::CatalogStore;

pub async fn execute(
    id: String,
    like: bool,
    set_status: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let set_status = set_status
        .as_deref()
        .map(|s| s.parse::<EnrollmentStatus>().map_err(|e| anyhow!(e)))
        .transpose()?;

    let (config, api) = super::connect(config_path.as_deref())?;
    let mut store = CatalogStore::new(config.user_id.clone());
    store.refresh(&api).await?;

    if store.course(&id).is_none() {
        bail!("course not found: {id}");
    }

    if like {
        store.toggle_like(&api, &id).await?;
        println!("Like toggled.");
    }

    if let Some(status) = set_status {
        store.set_status(&api, &id, status).await?;
        println!("Status set to {status}.");
    }

    // Unwrap is fine: existence checked above, updates keep the id.
    let course = store.course(&id).unwrap();

    println!("{}", course.title);
    if !course.provider.is_empty() {
        println!("Provider:   {}", course.provider);
    }
    println!("Type:       {}", course.course_type);
    if !course.category.is_empty() {
        println!("Category:   {}", course.category);
    }
    if !course.language.is_empty() {
        println!("Language:   {}", course.language);
    }
    println!("Difficulty: {}", difficulty_meter(course.difficulty));
    println!("Likes:      {}", course.like_count());
    if let Some(user) = &config.user_id {
        if course.liked_by(user) {
            println!("            (you like this course)");
        }
    }
    if let Some(status) = store.status_for(&id) {
        let badge = status_badge(status);
        println!("Status:     {} {}", badge.icon, badge.label);
    }
    if let Some(pick) = &course.editors_pick {
        println!("Editors' pick [{}]: {}", pick.tag, pick.comment);
    }
    if let Some(link) = &course.link {
        println!("Link:       {link}");
    }
    if !course.description.is_empty() {
        println!("\n{}", course.description);
    } else if !course.short_description.is_empty() {
        println!("\n{}", course.short_description);
    }

    Ok(())
}
