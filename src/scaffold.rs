use crate::category::Category;
use crate::editor::{enum_path, icon_map_path};
use crate::enum_file;
use crate::error::Result;
use crate::icon_map;
use crate::style::Style;
use crate::templates;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Web framework the generated component targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Framework {
    #[default]
    Next,
    Vite,
}

#[derive(Debug, Clone)]
pub struct ScaffoldOptions<'a> {
    pub framework: Framework,
    pub image_base_path: &'a str,
    pub dark_mode_class: &'a str,
}

/// Files written by a scaffold run and files that were already there
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    pub created: Vec<PathBuf>,
    pub kept: Vec<PathBuf>,
}

/// Whether `target_dir` already holds a lookup table
pub fn is_initialized(target_dir: &Path) -> bool {
    icon_map_path(target_dir).exists()
}

/// Create the target directory tree and seed the generated files.
///
/// Existing files are never overwritten, so running this on an initialized
/// directory only fills in whatever is missing.
pub fn scaffold(target_dir: &Path, options: &ScaffoldOptions<'_>) -> Result<ScaffoldReport> {
    fs::create_dir_all(target_dir.join("constants"))?;
    fs::create_dir_all(target_dir.join("types"))?;
    for category in Category::ALL {
        fs::create_dir_all(target_dir.join(category.directory()))?;
    }

    let component = match options.framework {
        Framework::Next => templates::NEXT_COMPONENT,
        Framework::Vite => templates::VITE_COMPONENT,
    };

    let mut files = vec![
        (
            icon_map_path(target_dir),
            image_paths_source(options.image_base_path),
        ),
        (
            target_dir.join("types").join("index.ts"),
            templates::TYPES_INDEX.to_string(),
        ),
    ];
    for category in Category::ALL {
        files.push((enum_path(target_dir, category), enum_source(category)));
    }
    files.push((
        target_dir.join("CryptoIcon.tsx"),
        templates::render(component, &[("DARK_CLASS", options.dark_mode_class)]),
    ));
    files.push((
        target_dir.join("index.ts"),
        templates::BARREL_INDEX.to_string(),
    ));

    let mut report = ScaffoldReport::default();
    for (path, content) in files {
        if write_new(&path, &content)? {
            tracing::debug!("created {}", path.display());
            report.created.push(path);
        } else {
            tracing::debug!("kept existing {}", path.display());
            report.kept.push(path);
        }
    }

    Ok(report)
}

/// Initial `constants/imagePaths.ts`
pub fn image_paths_source(base_url: &str) -> String {
    format!(
        "{}{}\n{}\n",
        templates::IMAGE_PATHS_PREAMBLE,
        icon_map::helper_definitions(base_url, "\n"),
        icon_map::empty_declaration(&Style::default())
    )
}

/// Initial enum file for a category
pub fn enum_source(category: Category) -> String {
    format!(
        "{}\n",
        enum_file::empty_declaration(category, &Style::default())
    )
}

/// Write `content` only if `path` does not exist yet
fn write_new(path: &Path, content: &str) -> Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(content.as_bytes())?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enum_file::EnumFile;
    use crate::icon_map::IconMapFile;

    #[test]
    fn test_seeded_files_parse_empty() {
        let map = IconMapFile::parse(&image_paths_source("/images/crypto")).unwrap();
        assert!(map.groups().is_empty());

        for category in Category::ALL {
            let parsed = EnumFile::parse(&enum_source(category), category).unwrap();
            assert!(parsed.members().is_empty());
        }
    }
}
