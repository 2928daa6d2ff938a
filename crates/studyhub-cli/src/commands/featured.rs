//! The `studyhub featured` command.

use std::path::PathBuf;

use anyhow::Result;

use studyhub_core::api::CatalogApi;
use studyhub_core::catalog::featured;
use studyhub_core::rotator::{RotatorHandle, ROTATION_PERIOD};

pub async fn execute(watch: bool, config_path: Option<PathBuf>) -> Result<()> {
    let (_config, api) = super::connect(config_path.as_deref())?;
    let courses = api.list_courses().await?;
    let feed = featured(&courses);

    if feed.is_empty() {
        println!("No featured courses right now.");
        return Ok(());
    }

    if !watch {
        for (i, course) in feed.iter().enumerate() {
            println!("{}. {} ({})", i + 1, course.title, course.provider);
        }
        return Ok(());
    }

    println!("Rotating every {}s, Ctrl-C to stop.", ROTATION_PERIOD.as_secs());
    let rotator = RotatorHandle::spawn(feed.len());
    let mut shown = None;
    let mut poll = tokio::time::interval(std::time::Duration::from_millis(100));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = poll.tick() => {
                let current = rotator.current();
                if current != shown {
                    if let Some(i) = current {
                        let course = &feed[i];
                        println!("[{}/{}] {} ({})", i + 1, feed.len(), course.title, course.provider);
                    }
                    shown = current;
                }
            }
        }
    }

    Ok(())
}
