pub mod extract;
pub mod markdown;

pub use extract::{
    current_task, extract_prompt_fields, phase_and_progress, Field, FieldRule, Locator, Shape,
    FIELD_RULES,
};
pub use markdown::{bullet_items, keyed_value, label, numbered_items, section_body};
