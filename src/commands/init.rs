use super::{display_path, report_remote_pattern};
use crate::next_config;
use crate::scaffold::{self, Framework, ScaffoldOptions};
use crate::settings::SettingsStore;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub dir: Option<PathBuf>,
    pub framework: Framework,
}

/// Scaffold the generated files into the target directory.
///
/// Files that already exist are kept. For Next.js projects whose image base
/// path is a remote URL, the host is also whitelisted in `next.config.*`.
pub fn run(project_root: &Path, options: &InitOptions) -> Result<()> {
    println!("\n{} Initializing crypto icons...\n", "->".blue());

    let config = SettingsStore::new(project_root).load();
    let target_dir = config.target_directory(project_root, options.dir.as_deref());

    if scaffold::is_initialized(&target_dir) {
        println!(
            "{} {} is already initialized; existing files are kept",
            "!".yellow(),
            display_path(project_root, &target_dir)
        );
    }

    let report = scaffold::scaffold(
        &target_dir,
        &ScaffoldOptions {
            framework: options.framework,
            image_base_path: config.image_base_path(),
            dark_mode_class: config.dark_mode_class(),
        },
    )
    .with_context(|| format!("Failed to scaffold {}", target_dir.display()))?;

    for path in &report.created {
        println!(
            "  {} Created {}",
            "✓".green(),
            display_path(project_root, path).cyan()
        );
    }
    for path in &report.kept {
        println!(
            "  {} Kept {}",
            "·".dimmed(),
            display_path(project_root, path)
        );
    }

    if options.framework == Framework::Next {
        if let Some(host) = remote_host(config.image_base_path()) {
            let outcome = next_config::ensure_remote_pattern(project_root, &host, &[])
                .context("Failed to update next.config")?;
            report_remote_pattern(project_root, &outcome);
        }
    }

    let import_path = display_path(project_root, &target_dir);
    println!("\n{} Crypto icons initialized!", "✓".green());
    println!("\n{}", "Next steps:".yellow());
    println!("  1. Configure default settings (optional): crypto-next-icons config");
    println!("  2. Add some icons: crypto-next-icons add --token BTC ETH");
    println!("  3. Import and use in your components:");
    println!(
        "{}",
        format!("     import {{ CryptoIcon }} from \"./{import_path}\"").dimmed()
    );
    println!("{}", "     <CryptoIcon name=\"BTC\" size={32} />".dimmed());

    Ok(())
}

/// Host of an absolute `http(s)` image base path
pub fn remote_host(image_base_path: &str) -> Option<String> {
    let url = Url::parse(image_base_path).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.host_str().map(str::to_string)
}
