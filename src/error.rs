use crate::models::DocumentKind;
use std::path::PathBuf;

/// Errors raised by document operations
#[derive(Debug, thiserror::Error)]
pub enum DevkitError {
    #[error("{kind} file not found: {}", path.display())]
    MissingFile { kind: DocumentKind, path: PathBuf },

    #[error("initialization canceled")]
    ConfirmationDeclined,

    /// The combined `Current Phase` / `Progress` pattern did not match
    #[error("no 'Progress: N%' line found under '## Current Phase' in the context file")]
    MissingProgress,

    #[error("invalid config '{}'", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to access '{}'", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read confirmation")]
    Prompt(#[source] std::io::Error),
}

pub type DevkitResult<T> = std::result::Result<T, DevkitError>;
