use super::{display_path, print_usage, EditOptions};
use crate::editor::{self, Change, EditorContext};
use crate::settings::SettingsStore;
use crate::special_icons::SpecialIconRegistry;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Remove every selected icon from the generated files
pub fn run(project_root: &Path, options: &EditOptions) -> Result<()> {
    let config = SettingsStore::new(project_root).load();
    let target_dir = config.target_directory(project_root, options.dir.as_deref());

    if options.selection.is_empty() {
        println!("{} No icons specified to remove.", "!".yellow());
        print_usage("remove");
        return Ok(());
    }

    println!(
        "\n{} Removing crypto icons from {}\n",
        "->".blue(),
        display_path(project_root, &target_dir).cyan()
    );

    let registry = SpecialIconRegistry::builtin();
    let ctx = EditorContext::new(&target_dir, &registry);
    let mut removed = 0;

    for (category, names) in options.selection.iter() {
        println!("{} Removing {} {category} icon(s)", "->".blue(), names.len());
        for name in names {
            let report = editor::remove_entry(&ctx, category, name)
                .with_context(|| format!("Failed to remove {category} icon {name}"))?;
            if report.icon_map == Change::Applied {
                removed += 1;
                println!("  {} {}", "✓".green(), name.cyan());
            } else {
                println!("  {} {} (not found)", "·".dimmed(), name);
            }
        }
    }

    println!("\n{} {removed} icon(s) removed", "✓".green());
    Ok(())
}
