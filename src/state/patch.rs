//! In-place rewrites of template-shaped documents.
//!
//! Each patch rewrites only the first match and returns whether it applied.
//! A patch whose target is missing leaves the text untouched.

use regex::Regex;

pub const COMPLETED_HEADING: &str = "## Completed\n";

/// Replace the first match of `pattern` with `replacement`, taken literally
fn replace_first(content: &mut String, pattern: &str, replacement: &str, what: &str) -> bool {
    let Ok(re) = Regex::new(pattern) else {
        return false;
    };

    match re.find(content).map(|m| m.range()) {
        Some(range) => {
            content.replace_range(range, replacement);
            true
        }
        None => {
            tracing::debug!(patch = what, "pattern not found, document left unchanged");
            false
        }
    }
}

/// Rewrite the value of the first `- KEY: value` line
pub fn set_keyed_line(content: &mut String, key: &str, value: &str) -> bool {
    replace_first(
        content,
        &format!(r"- {}: .*?\n", regex::escape(key)),
        &format!("- {}: {}\n", key, value),
        key,
    )
}

/// Insert `- entry` directly under the `## Completed` heading
pub fn prepend_completed(content: &mut String, entry: &str) -> bool {
    match content.find(COMPLETED_HEADING) {
        Some(idx) => {
            content.insert_str(idx + COMPLETED_HEADING.len(), &format!("- {}\n", entry));
            true
        }
        None => {
            tracing::debug!(patch = "Completed", "heading not found, document left unchanged");
            false
        }
    }
}

/// Rewrite the `## Current Phase: ...` heading
pub fn set_phase(content: &mut String, phase: &str) -> bool {
    replace_first(
        content,
        r"## Current Phase: .*?\n",
        &format!("## Current Phase: {}\n", phase),
        "Current Phase",
    )
}

/// Rewrite the `Progress: N%` value
pub fn set_progress(content: &mut String, progress: &str) -> bool {
    replace_first(
        content,
        r"Progress: .*?%",
        &format!("Progress: {}%", progress),
        "Progress",
    )
}
