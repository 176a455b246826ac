use super::{display_path, report_remote_pattern};
use crate::editor::{icon_map_path, read_artifact};
use crate::error::IconError;
use crate::icon_map;
use crate::next_config;
use crate::settings::SettingsStore;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Base URL of the hosted image CDN
pub const HOSTING_BASE_URL: &str = "https://crypto-images-4545f.web.app/images";

pub const HOSTING_HOST: &str = "crypto-images-4545f.web.app";

/// Host the images were served from before the CDN
pub const LEGACY_STORAGE_HOST: &str = "firebasestorage.googleapis.com";

#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub dir: Option<PathBuf>,
}

/// Point the generated image helpers at the hosted CDN and whitelist its
/// host in `next.config.*`. The lookup table itself is left untouched.
pub fn run(project_root: &Path, options: &UpdateOptions) -> Result<()> {
    let config = SettingsStore::new(project_root).load();
    let target_dir = config.target_directory(project_root, options.dir.as_deref());
    let path = icon_map_path(&target_dir);

    let source = read_artifact(&path)?;
    let (updated, replaced) = icon_map::replace_helper_definitions(&source, HOSTING_BASE_URL)
        .map_err(|reason| IconError::MalformedStructure {
            path: path.clone(),
            reason,
        })?;

    if updated != source {
        fs::write(&path, &updated)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    if replaced == 0 {
        tracing::info!("no image helpers found, inserted them above iconMap");
    }
    println!(
        "{} Image helpers in {} now point at {}",
        "✓".green(),
        display_path(project_root, &path).cyan(),
        HOSTING_BASE_URL
    );

    let outcome =
        next_config::ensure_remote_pattern(project_root, HOSTING_HOST, &[LEGACY_STORAGE_HOST])
            .context("Failed to update next.config")?;
    report_remote_pattern(project_root, &outcome);

    Ok(())
}
