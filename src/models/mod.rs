pub mod config;
pub mod document;
pub mod fields;

pub use config::DevkitConfig;
pub use document::{DocumentKind, ProjectFiles};
pub use fields::{
    InitOutcome, InitRequest, PhaseOutcome, PhaseUpdate, PromptFields, PromptOutcome,
    StateOutcome, StateUpdate,
};
