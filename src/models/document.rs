use std::fmt;
use std::path::{Path, PathBuf};

/// The three documents maintained in a project directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Definition, phase, architecture, principles
    Context,
    /// Current task, completed and next tasks, challenges, decisions
    State,
    /// Generated prompt for the AI assistant
    Prompt,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Context,
        DocumentKind::State,
        DocumentKind::Prompt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DocumentKind::Context => "Context",
            DocumentKind::State => "State",
            DocumentKind::Prompt => "Prompt",
        }
    }

    /// File name used when no config overrides it
    pub fn default_file_name(&self) -> &'static str {
        match self {
            DocumentKind::Context => "project-context.md",
            DocumentKind::State => "development-state.md",
            DocumentKind::Prompt => "prompt-template.md",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved paths of the documents in one project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFiles {
    pub dir: PathBuf,
    pub context: PathBuf,
    pub state: PathBuf,
    pub prompt: PathBuf,
}

impl ProjectFiles {
    /// Paths using the default file names
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_names(
            dir,
            DocumentKind::Context.default_file_name(),
            DocumentKind::State.default_file_name(),
            DocumentKind::Prompt.default_file_name(),
        )
    }

    pub fn with_names(dir: impl Into<PathBuf>, context: &str, state: &str, prompt: &str) -> Self {
        let dir = dir.into();
        Self {
            context: dir.join(context),
            state: dir.join(state),
            prompt: dir.join(prompt),
            dir,
        }
    }

    pub fn path(&self, kind: DocumentKind) -> &Path {
        match kind {
            DocumentKind::Context => &self.context,
            DocumentKind::State => &self.state,
            DocumentKind::Prompt => &self.prompt,
        }
    }

    /// Documents that already exist on disk
    pub fn existing(&self) -> Vec<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .filter(|kind| self.path(*kind).exists())
            .collect()
    }
}
