use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, editing or scaffolding generated icon files
#[derive(Debug, Error)]
pub enum IconError {
    /// A generated file the editor needs has not been created yet
    #[error("{} not found. Run `crypto-next-icons init` first", path.display())]
    MissingArtifact { path: PathBuf },

    /// The generated file exists but its declaration no longer has the expected shape
    #[error("unexpected structure in {}: {reason}", path.display())]
    MalformedStructure { path: PathBuf, reason: String },

    #[error("invalid icon name {name:?}: names may only contain letters, digits, `_` and `$`")]
    InvalidName { name: String },

    #[error("failed to serialize settings for {}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IconError>;
