use super::{DocumentKind, ProjectFiles};
use crate::error::{DevkitError, DevkitResult};
use serde::Deserialize;
use std::path::Path;

/// Optional per-project settings read from `devkit.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DevkitConfig {
    /// Name used on the prompt's `Project:` line
    pub project_name: Option<String>,

    /// Context document file name
    pub context_file: String,

    /// State document file name
    pub state_file: String,

    /// Prompt document file name
    pub prompt_file: String,
}

impl Default for DevkitConfig {
    fn default() -> Self {
        Self {
            project_name: None,
            context_file: DocumentKind::Context.default_file_name().to_string(),
            state_file: DocumentKind::State.default_file_name().to_string(),
            prompt_file: DocumentKind::Prompt.default_file_name().to_string(),
        }
    }
}

impl DevkitConfig {
    pub const FILE_NAME: &'static str = "devkit.toml";

    /// Load config from `<project_dir>/devkit.toml`, defaults when absent
    pub fn load(project_dir: &Path) -> DevkitResult<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| DevkitError::Io {
            path: config_path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| DevkitError::Config {
            path: config_path,
            source,
        })
    }

    /// Resolve document paths inside `project_dir`
    pub fn project_files(&self, project_dir: &Path) -> ProjectFiles {
        ProjectFiles::with_names(
            project_dir,
            &self.context_file,
            &self.state_file,
            &self.prompt_file,
        )
    }

    /// Name shown on the prompt's `Project:` line
    pub fn display_name(&self) -> &str {
        self.project_name.as_deref().unwrap_or("Project")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = DevkitConfig::load(dir.path()).unwrap();
        assert_eq!(config, DevkitConfig::default());
        assert_eq!(config.display_name(), "Project");
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(DevkitConfig::FILE_NAME),
            "project_name = \"Orbit\"\nprompt_file = \"PROMPT.md\"\n",
        )
        .unwrap();

        let config = DevkitConfig::load(dir.path()).unwrap();
        assert_eq!(config.display_name(), "Orbit");
        assert_eq!(config.context_file, "project-context.md");

        let files = config.project_files(dir.path());
        assert_eq!(files.prompt, dir.path().join("PROMPT.md"));
    }

    #[test]
    fn test_load_malformed_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DevkitConfig::FILE_NAME), "project_name = [").unwrap();

        let err = DevkitConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, DevkitError::Config { .. }));
    }
}
