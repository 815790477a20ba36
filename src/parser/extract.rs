//! Field extraction for prompt generation.
//!
//! Every field comes from one row of [`FIELD_RULES`]: where to look, how to
//! shape what was found, and what to use when nothing matched. Rules are
//! applied independently, so a drifted section only costs its own field.

use super::markdown::{bullet_items, keyed_value, label, numbered_items, section_body};
use crate::models::{DocumentKind, PromptFields};
use regex::Regex;
use std::sync::LazyLock;

/// Phase label and progress are captured together; if either line drifts,
/// both fall back.
static PHASE_PROGRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)## Current Phase: (.*?)\nProgress: (.*?)%").expect("valid phase pattern")
});

pub const DEFAULT_PHASE: &str = "Current phase";
pub const DEFAULT_TASK: &str = "implementation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Definition,
    Architecture,
    Principles,
    CurrentTask,
    CompletionCriteria,
    WorkingFiles,
    IntegrationPoints,
    Completed,
    NextTasks,
    Challenges,
    Decisions,
}

/// Where a rule looks in its source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// Body of `## <heading>`
    Section(&'static str),
    /// Value of `- <KEY>: ...`
    Keyed(&'static str),
}

/// How the located text becomes a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Trimmed text as-is
    Text,
    /// All top-level bullets, joined
    Bullets,
    /// Text before `:` of every top-level bullet, joined
    Labels,
    /// Last `n` top-level bullets, joined
    LastBullets(usize),
    /// First `n` numbered items, joined
    FirstNumbered(usize),
    /// Labels, but a body containing "None yet" or no bullets counts as empty
    OpenLabels,
    /// Labels of the last `n` bullets; no bullets counts as empty
    LastLabels(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub source: DocumentKind,
    pub locator: Locator,
    pub shape: Shape,
    pub default: &'static str,
}

pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Definition,
        source: DocumentKind::Context,
        locator: Locator::Section("Definition"),
        shape: Shape::Text,
        default: "",
    },
    FieldRule {
        field: Field::Architecture,
        source: DocumentKind::Context,
        locator: Locator::Section("Architecture"),
        shape: Shape::Bullets,
        default: "Initial architecture",
    },
    FieldRule {
        field: Field::Principles,
        source: DocumentKind::Context,
        locator: Locator::Section("Development Principles"),
        shape: Shape::Labels,
        default: "Modularity, Maintainability",
    },
    FieldRule {
        field: Field::CurrentTask,
        source: DocumentKind::State,
        locator: Locator::Keyed("CURRENT TASK"),
        shape: Shape::Text,
        default: DEFAULT_TASK,
    },
    FieldRule {
        field: Field::CompletionCriteria,
        source: DocumentKind::State,
        locator: Locator::Keyed("COMPLETION CRITERIA"),
        shape: Shape::Text,
        default: "Task complete",
    },
    FieldRule {
        field: Field::WorkingFiles,
        source: DocumentKind::State,
        locator: Locator::Keyed("WORKING FILES"),
        shape: Shape::Text,
        default: "relevant files",
    },
    FieldRule {
        field: Field::IntegrationPoints,
        source: DocumentKind::State,
        locator: Locator::Keyed("INTEGRATION POINTS"),
        shape: Shape::Text,
        default: "related components",
    },
    FieldRule {
        field: Field::Completed,
        source: DocumentKind::State,
        locator: Locator::Section("Completed"),
        shape: Shape::LastBullets(3),
        default: "",
    },
    FieldRule {
        field: Field::NextTasks,
        source: DocumentKind::State,
        locator: Locator::Section("Next Tasks"),
        shape: Shape::FirstNumbered(3),
        default: "",
    },
    FieldRule {
        field: Field::Challenges,
        source: DocumentKind::State,
        locator: Locator::Section("Challenges"),
        shape: Shape::OpenLabels,
        default: "None identified",
    },
    FieldRule {
        field: Field::Decisions,
        source: DocumentKind::State,
        locator: Locator::Section("Decisions"),
        shape: Shape::LastLabels(2),
        default: "No recent decisions",
    },
];

pub fn rule(field: Field) -> &'static FieldRule {
    FIELD_RULES
        .iter()
        .find(|rule| rule.field == field)
        .unwrap_or_else(|| unreachable!("every field has a rule"))
}

impl FieldRule {
    /// Apply the rule, `None` when nothing usable matched
    pub fn apply(&self, context: &str, state: &str) -> Option<String> {
        let content = match self.source {
            DocumentKind::State => state,
            _ => context,
        };

        let found = match self.locator {
            Locator::Section(heading) => section_body(content, heading)?,
            Locator::Keyed(key) => keyed_value(content, key)?,
        };

        match self.shape {
            Shape::Text => Some(found.trim().to_string()),
            Shape::Bullets => Some(bullet_items(found).join(", ")),
            Shape::Labels => Some(labels(&bullet_items(found)).join(", ")),
            Shape::LastBullets(n) => Some(last(&bullet_items(found), n).join(", ")),
            Shape::FirstNumbered(n) => {
                let items = numbered_items(found);
                Some(items[..items.len().min(n)].join(", "))
            }
            Shape::OpenLabels => {
                if found.contains("None yet") {
                    return None;
                }
                non_empty(labels(&bullet_items(found)).join(", "))
            }
            Shape::LastLabels(n) => {
                non_empty(labels(last(&bullet_items(found), n)).join(", "))
            }
        }
    }

    /// Apply the rule, substituting the default on no match
    pub fn extract(&self, context: &str, state: &str) -> String {
        self.apply(context, state).unwrap_or_else(|| {
            tracing::debug!(field = ?self.field, default = self.default, "field not found, using default");
            self.default.to_string()
        })
    }
}

fn labels<'a>(items: &[&'a str]) -> Vec<&'a str> {
    items.iter().copied().map(label).collect()
}

fn last<'a, 'b>(items: &'b [&'a str], n: usize) -> &'b [&'a str] {
    &items[items.len().saturating_sub(n)..]
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Phase label and progress from the context document
pub fn phase_and_progress(context: &str) -> (String, Option<String>) {
    match PHASE_PROGRESS.captures(context) {
        Some(caps) => (
            caps[1].trim().to_string(),
            Some(caps[2].trim().to_string()),
        ),
        None => {
            tracing::debug!("phase/progress pattern not found, using defaults");
            (DEFAULT_PHASE.to_string(), None)
        }
    }
}

/// Current task of the state document
pub fn current_task(state: &str) -> String {
    rule(Field::CurrentTask).extract("", state)
}

/// Extract every prompt field from the context and state documents
pub fn extract_prompt_fields(
    context: &str,
    state: &str,
    project_name: &str,
    focus: Option<&str>,
) -> PromptFields {
    let get = |field| rule(field).extract(context, state);

    let project = match rule(Field::Definition).apply(context, state) {
        Some(definition) => format!("{} - {}", project_name, definition),
        None => project_name.to_string(),
    };
    let (phase, progress) = phase_and_progress(context);
    let current_task = match focus {
        Some(focus) => focus.to_string(),
        None => get(Field::CurrentTask),
    };

    PromptFields {
        project,
        phase,
        progress,
        architecture: get(Field::Architecture),
        principles: get(Field::Principles),
        current_task,
        completion_criteria: get(Field::CompletionCriteria),
        working_files: get(Field::WorkingFiles),
        integration_points: get(Field::IntegrationPoints),
        completed: get(Field::Completed),
        next_tasks: get(Field::NextTasks),
        challenges: get(Field::Challenges),
        decisions: get(Field::Decisions),
    }
}
