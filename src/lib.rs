// RecursiveDevKit - keeps project context, development state and the AI prompt in sync
// Pattern-based extraction and templating over three markdown documents

pub mod cli;
pub mod confirm;
pub mod error;
pub mod models;
pub mod parser;
pub mod state;
pub mod templates;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use error::{DevkitError, DevkitResult};
pub use models::{DevkitConfig, DocumentKind, InitRequest, PhaseUpdate, ProjectFiles, StateUpdate};
pub use state::DocumentStateManager;
