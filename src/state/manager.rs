//! DocumentStateManager - read-modify-write cycles over the project documents

use super::patch;
use crate::confirm::Confirmer;
use crate::error::{DevkitError, DevkitResult};
use crate::models::{
    DevkitConfig, DocumentKind, InitOutcome, InitRequest, PhaseOutcome, PhaseUpdate,
    ProjectFiles, PromptFields, PromptOutcome, StateOutcome, StateUpdate,
};
use crate::parser::{current_task, extract_prompt_fields};
use crate::templates;
use std::path::Path;

const OVERWRITE_PROMPT: &str = "Framework files already exist. Overwrite?";

/// Subject of a regenerated prompt's opening line
const PROMPT_SUBJECT: &str = "the project";

/// Manager for the context, state and prompt documents of one project
#[derive(Debug, Clone)]
pub struct DocumentStateManager {
    files: ProjectFiles,
    project_name: String,
}

impl DocumentStateManager {
    /// Manager over the given paths, naming the project "Project"
    pub fn new(files: ProjectFiles) -> Self {
        Self {
            files,
            project_name: "Project".to_string(),
        }
    }

    /// Open a project directory, applying its `devkit.toml` if present
    pub fn open(project_dir: &Path) -> DevkitResult<Self> {
        let config = DevkitConfig::load(project_dir)?;
        Ok(Self::new(config.project_files(project_dir)).with_project_name(config.display_name()))
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    pub fn files(&self) -> &ProjectFiles {
        &self.files
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Write all three documents from their templates.
    ///
    /// When any document already exists, `confirmer` decides whether to
    /// overwrite; a refusal returns [`DevkitError::ConfirmationDeclined`]
    /// before anything is touched.
    pub fn initialize(
        &self,
        request: &InitRequest,
        confirmer: &dyn Confirmer,
    ) -> DevkitResult<InitOutcome> {
        let existing = self.files.existing();
        if !existing.is_empty() {
            tracing::debug!(?existing, "documents already present");
            if !confirmer.confirm(OVERWRITE_PROMPT)? {
                return Err(DevkitError::ConfirmationDeclined);
            }
        }

        let context = templates::render_context(request);
        let state = templates::render_state();
        let prompt = templates::render_prompt(
            &request.project_name,
            &templates::initial_prompt_fields(request),
        )?;

        std::fs::create_dir_all(&self.files.dir).map_err(|source| DevkitError::Io {
            path: self.files.dir.clone(),
            source,
        })?;

        self.write(DocumentKind::Context, &context)?;
        self.write(DocumentKind::State, &state)?;
        self.write(DocumentKind::Prompt, &prompt)?;

        Ok(InitOutcome {
            project_name: request.project_name.clone(),
            created: DocumentKind::ALL
                .iter()
                .map(|kind| self.files.path(*kind).to_path_buf())
                .collect(),
        })
    }

    /// Extract prompt fields from the context and state documents
    pub fn extract_fields(&self, focus: Option<&str>) -> DevkitResult<PromptFields> {
        self.require(DocumentKind::Context)?;
        self.require(DocumentKind::State)?;

        let context = self.read(DocumentKind::Context)?;
        let state = self.read(DocumentKind::State)?;

        Ok(extract_prompt_fields(
            &context,
            &state,
            &self.project_name,
            given(focus),
        ))
    }

    /// Rebuild the prompt document from the other two
    pub fn regenerate_prompt(&self, focus: Option<&str>) -> DevkitResult<PromptOutcome> {
        let fields = self.extract_fields(focus)?;
        let prompt = templates::render_prompt(PROMPT_SUBJECT, &fields)?;
        self.write(DocumentKind::Prompt, &prompt)?;

        Ok(PromptOutcome {
            current_task: fields.current_task,
            path: self.files.prompt.clone(),
        })
    }

    /// Record a completed task and/or move on to the next one.
    ///
    /// `reset` replaces the whole document and ignores every other input.
    /// Otherwise the completed entry is labelled with the task that was
    /// current before this call, and `criteria`/`files`/`integration` only
    /// apply together with `next`.
    pub fn update_state(&self, update: &StateUpdate) -> DevkitResult<StateOutcome> {
        self.require(DocumentKind::State)?;

        if update.reset {
            self.write(DocumentKind::State, &templates::render_reset_state())?;
            return Ok(StateOutcome {
                reset: true,
                ..StateOutcome::default()
            });
        }

        let mut content = self.read(DocumentKind::State)?;
        let mut outcome = StateOutcome::default();

        if let Some(completed) = given(update.completed.as_deref()) {
            let task = current_task(&content);
            patch::prepend_completed(&mut content, &format!("{}: {}", task, completed));
            outcome.completed = Some(completed.to_string());
        }

        if let Some(next) = given(update.next.as_deref()) {
            patch::set_keyed_line(&mut content, "CURRENT TASK", next);

            let details = [
                ("COMPLETION CRITERIA", update.criteria.as_deref()),
                ("WORKING FILES", update.files.as_deref()),
                ("INTEGRATION POINTS", update.integration.as_deref()),
            ];
            for (key, value) in details {
                if let Some(value) = given(value) {
                    patch::set_keyed_line(&mut content, key, value);
                }
            }
            outcome.next = Some(next.to_string());
        }

        self.write(DocumentKind::State, &content)?;
        Ok(outcome)
    }

    /// Change the phase heading and/or progress of the context document
    pub fn update_phase(&self, update: &PhaseUpdate) -> DevkitResult<PhaseOutcome> {
        self.require(DocumentKind::Context)?;
        let mut content = self.read(DocumentKind::Context)?;
        let mut outcome = PhaseOutcome::default();

        if let Some(phase) = given(update.phase.as_deref()) {
            patch::set_phase(&mut content, phase);
            outcome.phase = Some(phase.to_string());
        }

        if let Some(progress) = given(update.progress.as_deref()) {
            let progress = progress.trim_end_matches('%');
            patch::set_progress(&mut content, progress);
            outcome.progress = Some(progress.to_string());
        }

        self.write(DocumentKind::Context, &content)?;
        Ok(outcome)
    }

    // =========================================================================
    // File access
    // =========================================================================

    fn require(&self, kind: DocumentKind) -> DevkitResult<()> {
        let path = self.files.path(kind);
        if path.exists() {
            Ok(())
        } else {
            Err(DevkitError::MissingFile {
                kind,
                path: path.to_path_buf(),
            })
        }
    }

    /// Read a document with line endings normalised to `\n`
    fn read(&self, kind: DocumentKind) -> DevkitResult<String> {
        let path = self.files.path(kind);
        let content = std::fs::read_to_string(path).map_err(|source| DevkitError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if content.contains("\r\n") {
            tracing::debug!(path = %path.display(), "normalising CRLF line endings");
            Ok(content.replace("\r\n", "\n"))
        } else {
            Ok(content)
        }
    }

    fn write(&self, kind: DocumentKind, content: &str) -> DevkitResult<()> {
        let path = self.files.path(kind);
        tracing::debug!(path = %path.display(), bytes = content.len(), "writing {}", kind);
        std::fs::write(path, content).map_err(|source| DevkitError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Treat empty strings like absent options
fn given(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::FixedAnswer;
    use tempfile::TempDir;

    fn init_project(dir: &TempDir) -> DocumentStateManager {
        let manager = DocumentStateManager::new(ProjectFiles::new(dir.path()));
        manager
            .initialize(&InitRequest::new("Orbit"), &FixedAnswer(true))
            .unwrap();
        manager
    }

    #[test]
    fn test_initialize_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("nested/project");
        let manager = DocumentStateManager::new(ProjectFiles::new(&project));

        let outcome = manager
            .initialize(&InitRequest::new("Orbit"), &FixedAnswer(false))
            .unwrap();

        assert_eq!(outcome.created.len(), 3);
        assert!(outcome.created.iter().all(|path| path.exists()));
    }

    #[test]
    fn test_initialize_only_asks_when_files_exist() {
        let dir = TempDir::new().unwrap();
        let manager = DocumentStateManager::new(ProjectFiles::new(dir.path()));

        // A declining confirmer is never consulted on a fresh directory
        manager
            .initialize(&InitRequest::new("Orbit"), &FixedAnswer(false))
            .unwrap();

        let err = manager
            .initialize(&InitRequest::new("Orbit"), &FixedAnswer(false))
            .unwrap_err();
        assert!(matches!(err, DevkitError::ConfirmationDeclined));
    }

    #[test]
    fn test_regenerate_prompt_after_init() {
        let dir = TempDir::new().unwrap();
        let manager = init_project(&dir);

        let outcome = manager.regenerate_prompt(None).unwrap();
        assert_eq!(outcome.current_task, "Initialize project structure");

        let prompt = std::fs::read_to_string(&outcome.path).unwrap();
        assert!(prompt.starts_with("Continue developing the project focusing"));
        assert!(prompt.contains("- Project: Project - A software project\n"));
        assert!(prompt.contains("- Current phase: 1/3 - Initialization\n"));
        assert!(prompt.contains("- Challenges: None identified\n"));
    }

    #[test]
    fn test_empty_focus_is_ignored() {
        let dir = TempDir::new().unwrap();
        let manager = init_project(&dir);

        let outcome = manager.regenerate_prompt(Some("")).unwrap();
        assert_eq!(outcome.current_task, "Initialize project structure");
    }

    #[test]
    fn test_completed_uses_task_before_next() {
        let dir = TempDir::new().unwrap();
        let manager = init_project(&dir);

        manager
            .update_state(&StateUpdate {
                completed: Some("scaffolded".to_string()),
                next: Some("Write parser".to_string()),
                ..StateUpdate::default()
            })
            .unwrap();

        let state = std::fs::read_to_string(&manager.files().state).unwrap();
        assert!(state.contains(
            "## Completed\n- Initialize project structure: scaffolded\n- Framework initialization\n"
        ));
        assert!(state.contains("- CURRENT TASK: Write parser\n"));
    }

    #[test]
    fn test_details_ignored_without_next() {
        let dir = TempDir::new().unwrap();
        let manager = init_project(&dir);
        let before = std::fs::read_to_string(&manager.files().state).unwrap();

        let outcome = manager
            .update_state(&StateUpdate {
                criteria: Some("never applied".to_string()),
                ..StateUpdate::default()
            })
            .unwrap();

        assert_eq!(outcome, StateOutcome::default());
        let after = std::fs::read_to_string(&manager.files().state).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_phase_strips_percent() {
        let dir = TempDir::new().unwrap();
        let manager = init_project(&dir);

        let outcome = manager
            .update_phase(&PhaseUpdate {
                phase: None,
                progress: Some("30%".to_string()),
            })
            .unwrap();
        assert_eq!(outcome.progress.as_deref(), Some("30"));

        let context = std::fs::read_to_string(&manager.files().context).unwrap();
        assert!(context.contains("Progress: 30% complete"));
        assert!(context.contains("## Current Phase: 1/3 - Initialization\n"));
    }

    #[test]
    fn test_missing_state_file() {
        let dir = TempDir::new().unwrap();
        let manager = DocumentStateManager::new(ProjectFiles::new(dir.path()));

        let err = manager.update_state(&StateUpdate::default()).unwrap_err();
        assert!(matches!(
            err,
            DevkitError::MissingFile {
                kind: DocumentKind::State,
                ..
            }
        ));
    }

    #[test]
    fn test_open_applies_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(DevkitConfig::FILE_NAME),
            "project_name = \"Orbit\"\n",
        )
        .unwrap();

        let manager = DocumentStateManager::open(dir.path()).unwrap();
        manager
            .initialize(&InitRequest::new("Orbit"), &FixedAnswer(true))
            .unwrap();
        manager.regenerate_prompt(None).unwrap();

        let prompt = std::fs::read_to_string(&manager.files().prompt).unwrap();
        assert!(prompt.contains("- Project: Orbit - A software project\n"));
    }
}
