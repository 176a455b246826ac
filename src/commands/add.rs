use super::{display_path, print_usage, EditOptions};
use crate::editor::{self, Change, EditorContext};
use crate::settings::SettingsStore;
use crate::special_icons::SpecialIconRegistry;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Add every selected icon to the generated files.
///
/// Names are applied one at a time, each with its own read-modify-write, so
/// a failure part way through keeps the names already added.
pub fn run(project_root: &Path, options: &EditOptions) -> Result<()> {
    let config = SettingsStore::new(project_root).load();
    let target_dir = config.target_directory(project_root, options.dir.as_deref());

    if options.selection.is_empty() {
        println!("{} No icons specified to add.", "!".yellow());
        print_usage("add");
        return Ok(());
    }

    println!(
        "\n{} Adding crypto icons in {}\n",
        "->".blue(),
        display_path(project_root, &target_dir).cyan()
    );

    let registry = SpecialIconRegistry::builtin();
    let ctx = EditorContext::new(&target_dir, &registry);
    let mut added = 0;

    for (category, names) in options.selection.iter() {
        println!("{} Adding {} {category} icon(s)", "->".blue(), names.len());
        for name in names {
            let report = editor::add_entry(&ctx, category, name)
                .with_context(|| format!("Failed to add {category} icon {name}"))?;
            if report.icon_map == Change::Applied {
                added += 1;
                println!("  {} {}", "✓".green(), name.cyan());
            } else {
                println!("  {} {} (unchanged)", "·".dimmed(), name);
            }
        }
    }

    println!("\n{} {added} icon(s) added", "✓".green());
    Ok(())
}
