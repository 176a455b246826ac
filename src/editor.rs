//! Add and remove icons in the generated files of a target directory.
//!
//! Every call is a full read-modify-write of the lookup table and of the
//! category's enum file. Both files are read and parsed before either is
//! written, and a file is only written when its content actually changes, so
//! repeating an operation leaves the files byte-identical.

use crate::category::Category;
use crate::enum_file::EnumFile;
use crate::error::{IconError, Result};
use crate::icon_map::{IconEntry, IconMapFile};
use crate::special_icons::SpecialIconRegistry;
use crate::syntax;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Location of the lookup table inside a target directory
pub fn icon_map_path(target_dir: &Path) -> PathBuf {
    target_dir.join("constants").join("imagePaths.ts")
}

/// Location of a category's enum file inside a target directory
pub fn enum_path(target_dir: &Path, category: Category) -> PathBuf {
    target_dir
        .join("types")
        .join(format!("{}.ts", category.enum_name()))
}

/// Everything an edit needs besides the icon itself
#[derive(Debug, Clone, Copy)]
pub struct EditorContext<'a> {
    target_dir: &'a Path,
    registry: &'a SpecialIconRegistry,
}

impl<'a> EditorContext<'a> {
    pub fn new(target_dir: &'a Path, registry: &'a SpecialIconRegistry) -> Self {
        Self {
            target_dir,
            registry,
        }
    }

    pub fn target_dir(&self) -> &Path {
        self.target_dir
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Applied,
    Unchanged,
}

/// What an add or remove did to each generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditReport {
    pub icon_map: Change,
    pub enumeration: Change,
}

impl EditReport {
    const UNCHANGED: EditReport = EditReport {
        icon_map: Change::Unchanged,
        enumeration: Change::Unchanged,
    };

    pub fn is_noop(&self) -> bool {
        *self == Self::UNCHANGED
    }
}

/// Add `name` to the lookup table and to the category enum.
///
/// A name already present in the lookup table is left alone (a warning is
/// logged); the enum is still brought in line if it lacks the name.
pub fn add_entry(ctx: &EditorContext<'_>, category: Category, name: &str) -> Result<EditReport> {
    validate_name(name)?;

    let map_path = icon_map_path(ctx.target_dir);
    let enum_path = enum_path(ctx.target_dir, category);
    let mut icon_map = read_icon_map(&map_path)?;
    let mut enumeration = read_enum(&enum_path, category)?;

    let icon_map_change = match icon_map.groups().find(name) {
        Some(existing) if existing != category => {
            tracing::warn!(
                "{name} already exists as a {existing} icon in {}, skipping",
                map_path.display()
            );
            return Ok(EditReport::UNCHANGED);
        }
        Some(_) => {
            tracing::warn!("{name} already exists in {}, skipping", map_path.display());
            Change::Unchanged
        }
        None => {
            let entry = IconEntry::for_icon(category, name, ctx.registry);
            tracing::debug!(light = %entry.light_mode, dark = %entry.dark_mode, "new {category} entry {name}");
            icon_map.groups_mut().insert(category, entry);
            Change::Applied
        }
    };

    let enum_change = if enumeration.insert(name) {
        Change::Applied
    } else {
        tracing::debug!("{name} already listed in {}", category.enum_name());
        Change::Unchanged
    };

    if icon_map_change == Change::Applied {
        fs::write(&map_path, icon_map.render())?;
        tracing::info!("added {category} icon {name} to icon map");
    }
    if enum_change == Change::Applied {
        fs::write(&enum_path, enumeration.render())?;
        tracing::info!("added {name} to {}", category.enum_name());
    }

    Ok(EditReport {
        icon_map: icon_map_change,
        enumeration: enum_change,
    })
}

/// Remove `name` from the category's group of the lookup table and from the
/// category enum. Missing names are reported and otherwise ignored.
pub fn remove_entry(
    ctx: &EditorContext<'_>,
    category: Category,
    name: &str,
) -> Result<EditReport> {
    validate_name(name)?;

    let map_path = icon_map_path(ctx.target_dir);
    let enum_path = enum_path(ctx.target_dir, category);
    let mut icon_map = read_icon_map(&map_path)?;
    let mut enumeration = read_enum(&enum_path, category)?;

    let icon_map_change = if icon_map.groups_mut().remove(category, name) {
        Change::Applied
    } else {
        match icon_map.groups().find(name) {
            Some(other) => tracing::warn!(
                "{name} is a {other} icon, not a {category} icon; not removed"
            ),
            None => tracing::warn!("{name} not found in {}", map_path.display()),
        }
        Change::Unchanged
    };

    let enum_change = if enumeration.remove(name) {
        Change::Applied
    } else {
        Change::Unchanged
    };

    if icon_map_change == Change::Applied {
        fs::write(&map_path, icon_map.render())?;
        tracing::info!("removed {category} icon {name} from icon map");
    }
    if enum_change == Change::Applied {
        fs::write(&enum_path, enumeration.render())?;
        tracing::info!("removed {name} from {}", category.enum_name());
    }

    Ok(EditReport {
        icon_map: icon_map_change,
        enumeration: enum_change,
    })
}

/// Icon names double as enum members, so they are limited to identifier
/// characters. A leading digit is allowed; the enum quotes such members.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || !name.chars().all(syntax::is_name_char) {
        return Err(IconError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Read a generated file, mapping a missing file to `MissingArtifact`
pub fn read_artifact(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IconError::MissingArtifact {
            path: path.to_path_buf(),
        },
        _ => IconError::Io(e),
    })
}

fn read_icon_map(path: &Path) -> Result<IconMapFile> {
    let source = read_artifact(path)?;
    IconMapFile::parse(&source).map_err(|reason| IconError::MalformedStructure {
        path: path.to_path_buf(),
        reason,
    })
}

fn read_enum(path: &Path, category: Category) -> Result<EnumFile> {
    let source = read_artifact(path)?;
    EnumFile::parse(&source, category).map_err(|reason| IconError::MalformedStructure {
        path: path.to_path_buf(),
        reason,
    })
}
