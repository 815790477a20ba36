use serde::Serialize;
use std::path::PathBuf;

/// Values substituted into the prompt template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptFields {
    /// `<name> - <definition>` or just `<name>` when there is no Definition
    pub project: String,
    pub phase: String,
    /// `None` when the combined phase/progress pattern did not match
    pub progress: Option<String>,
    pub architecture: String,
    pub principles: String,
    pub current_task: String,
    pub completion_criteria: String,
    pub working_files: String,
    pub integration_points: String,
    pub completed: String,
    pub next_tasks: String,
    pub challenges: String,
    pub decisions: String,
}

/// Input of `init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitRequest {
    pub project_name: String,
    pub description: String,
    pub phases: String,
    pub initial_phase: String,
}

impl InitRequest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            description: "A software project".to_string(),
            phases: "3".to_string(),
            initial_phase: "Initialization".to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_phases(mut self, phases: impl Into<String>) -> Self {
        self.phases = phases.into();
        self
    }

    pub fn with_initial_phase(mut self, initial_phase: impl Into<String>) -> Self {
        self.initial_phase = initial_phase.into();
        self
    }
}

/// Input of `state`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
    pub completed: Option<String>,
    pub next: Option<String>,
    pub criteria: Option<String>,
    pub files: Option<String>,
    pub integration: Option<String>,
    pub reset: bool,
}

/// Input of `phase`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseUpdate {
    pub phase: Option<String>,
    pub progress: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub project_name: String,
    pub created: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOutcome {
    pub current_task: String,
    pub path: PathBuf,
}

/// What `state` changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateOutcome {
    pub reset: bool,
    pub completed: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseOutcome {
    pub phase: Option<String>,
    pub progress: Option<String>,
}
