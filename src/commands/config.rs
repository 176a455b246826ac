use super::display_path;
use crate::settings::{Config, SettingsStore};
use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::path::Path;

/// Raw CLI flags for `config`
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub dir: Option<String>,
    pub image_path: Option<String>,
    pub dark_mode_class: Option<String>,
    pub reset: bool,
}

impl ConfigOptions {
    fn has_any_value(&self) -> bool {
        self.dir.is_some() || self.image_path.is_some() || self.dark_mode_class.is_some()
    }
}

/// Update the project settings.
///
/// - `--reset` overwrites the file with an empty config.
/// - Any value flag is merged into the stored config.
/// - Otherwise, prompts interactively with `dialoguer`.
pub fn run(project_root: &Path, options: &ConfigOptions) -> Result<()> {
    let store = SettingsStore::new(project_root);

    if options.reset {
        store.save(&Config::default()).context("Failed to save config")?;
        println!("{} Configuration reset to defaults", "✓".green());
        return Ok(());
    }

    let mut config = store.load();

    if options.has_any_value() {
        if let Some(dir) = &options.dir {
            config.default_directory = Some(dir.clone());
        }
        if let Some(image_path) = &options.image_path {
            config.image_base_path = Some(image_path.clone());
        }
        if let Some(class) = &options.dark_mode_class {
            config.dark_mode_class = Some(class.clone());
        }
        store.save(&config).context("Failed to save config")?;
        println!(
            "{} Configuration saved to {}",
            "✓".green(),
            display_path(project_root, store.path()).cyan()
        );
        print_summary(&config);
        return Ok(());
    }

    match prompt(&config)? {
        Some(config) => {
            store.save(&config).context("Failed to save config")?;
            println!("\n{} Configuration saved", "✓".green());
            println!(
                "{}",
                "Next time you run commands, these settings will be used by default.".yellow()
            );
        }
        None => println!("{}", "Configuration not saved.".yellow()),
    }

    Ok(())
}

fn print_summary(config: &Config) {
    println!("  directory:       {}", config.default_directory.as_deref().unwrap_or("(default)"));
    println!("  image base path: {}", config.image_base_path());
    println!("  dark mode class: {}", config.dark_mode_class());
}

fn prompt(current: &Config) -> Result<Option<Config>> {
    println!("\n{} Crypto Icons Configuration\n", "->".blue());

    let default_directory = ask(
        "Default directory for crypto icons",
        current
            .default_directory
            .as_deref()
            .unwrap_or(crate::settings::DEFAULT_DIRECTORY),
    )?;
    let image_base_path = ask("Base path for images", current.image_base_path())?;
    let dark_mode_class = ask("CSS class for dark mode detection", current.dark_mode_class())?;

    let save = Confirm::new()
        .with_prompt("Save configuration?")
        .default(true)
        .interact()?;

    Ok(save.then(|| Config {
        default_directory: Some(default_directory),
        image_base_path: Some(image_base_path),
        dark_mode_class: Some(dark_mode_class),
    }))
}

fn ask(prompt: &str, default: &str) -> Result<String> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Value cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(answer.trim().to_string())
}
