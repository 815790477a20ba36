//! Embedded document templates and `{{KEY}}` substitution

use crate::error::{DevkitError, DevkitResult};
use crate::models::{InitRequest, PromptFields};
use regex::{Captures, Regex};
use std::sync::LazyLock;

const CONTEXT_TEMPLATE: &str = include_str!("../templates/project-context.md");
const STATE_TEMPLATE: &str = include_str!("../templates/development-state.md");
const STATE_RESET_TEMPLATE: &str = include_str!("../templates/development-state-reset.md");
const PROMPT_TEMPLATE: &str = include_str!("../templates/prompt-template.md");

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z_]+)\}\}").expect("valid placeholder pattern"));

/// Substitute `{{KEY}}` placeholders in one pass.
///
/// Values are inserted verbatim and never rescanned; unknown placeholders are
/// left in place.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            values
                .iter()
                .find(|(key, _)| *key == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

pub fn render_context(request: &InitRequest) -> String {
    fill(
        CONTEXT_TEMPLATE,
        &[
            ("DESCRIPTION", request.description.as_str()),
            ("PHASES", request.phases.as_str()),
            ("INITIAL_PHASE", request.initial_phase.as_str()),
        ],
    )
}

pub fn render_state() -> String {
    STATE_TEMPLATE.to_string()
}

pub fn render_reset_state() -> String {
    STATE_RESET_TEMPLATE.to_string()
}

/// Render the prompt document.
///
/// `subject` completes "Continue developing ...". Fails with
/// [`DevkitError::MissingProgress`] when no progress value was extracted.
pub fn render_prompt(subject: &str, fields: &PromptFields) -> DevkitResult<String> {
    let progress = fields
        .progress
        .as_deref()
        .ok_or(DevkitError::MissingProgress)?;

    Ok(fill(
        PROMPT_TEMPLATE,
        &[
            ("SUBJECT", subject),
            ("TASK", fields.current_task.as_str()),
            ("FILES", fields.working_files.as_str()),
            ("INTEGRATION", fields.integration_points.as_str()),
            ("CRITERIA", fields.completion_criteria.as_str()),
            ("PROJECT", fields.project.as_str()),
            ("PHASE", fields.phase.as_str()),
            ("PROGRESS", progress),
            ("ARCHITECTURE", fields.architecture.as_str()),
            ("PRINCIPLES", fields.principles.as_str()),
            ("COMPLETED", fields.completed.as_str()),
            ("NEXT_TASKS", fields.next_tasks.as_str()),
            ("CHALLENGES", fields.challenges.as_str()),
            ("DECISIONS", fields.decisions.as_str()),
        ],
    ))
}

/// Field values of the prompt written by `init`, matching the fresh templates
pub fn initial_prompt_fields(request: &InitRequest) -> PromptFields {
    PromptFields {
        project: format!("{} - {}", request.project_name, request.description),
        phase: format!("1/{} - {}", request.phases, request.initial_phase),
        progress: Some("0".to_string()),
        architecture: "Initial implementation pending".to_string(),
        principles: "Modularity, Testability, Maintainability".to_string(),
        current_task: "Initialize project structure".to_string(),
        completion_criteria: "Repository structure and base files created".to_string(),
        working_files: "Initial repository setup".to_string(),
        integration_points: "None yet".to_string(),
        completed: "Framework initialization".to_string(),
        next_tasks: "Define initial architecture, Set up core components".to_string(),
        challenges: "None yet".to_string(),
        decisions: "Using RecursiveDevKit framework for development".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_single_pass() {
        let out = fill("{{A}} and {{B}}", &[("A", "{{B}}"), ("B", "b")]);
        assert_eq!(out, "{{B}} and b");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        assert_eq!(fill("x {{NOPE}} y", &[]), "x {{NOPE}} y");
    }

    #[test]
    fn test_render_context_substitutes_request() {
        let request = InitRequest::new("Orbit")
            .with_description("Satellite tracker")
            .with_phases("4")
            .with_initial_phase("Bootstrap");
        let context = render_context(&request);

        assert!(context.contains("## Definition\nSatellite tracker\n"));
        assert!(context.contains("## Current Phase: 1/4 - Bootstrap\nProgress: 0% complete\n"));
        assert!(!context.contains("{{"));
    }

    #[test]
    fn test_render_prompt_requires_progress() {
        let mut fields = initial_prompt_fields(&InitRequest::new("Orbit"));
        fields.progress = None;
        let err = render_prompt("the project", &fields).unwrap_err();
        assert!(matches!(err, DevkitError::MissingProgress));
    }

    #[test]
    fn test_render_initial_prompt() {
        let request = InitRequest::new("Orbit");
        let prompt = render_prompt(&request.project_name, &initial_prompt_fields(&request)).unwrap();

        assert!(prompt.starts_with("Continue developing Orbit focusing on the following task:\n"));
        assert!(prompt.contains("- Project: Orbit - A software project\n"));
        assert!(prompt.contains("- Current phase: 1/3 - Initialization\n"));
        assert!(prompt.contains("- Progress: 0% complete\n"));
        assert!(prompt.contains("- Challenges: None yet\n"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_templates_keep_keyed_lines() {
        for state in [render_state(), render_reset_state()] {
            for key in [
                "CURRENT TASK",
                "COMPLETION CRITERIA",
                "WORKING FILES",
                "INTEGRATION POINTS",
            ] {
                assert!(state.contains(&format!("- {}: ", key)));
            }
        }
    }
}
