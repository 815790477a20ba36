//! Pattern-based primitives over template-shaped markdown.
//!
//! Nothing here parses markdown structurally. A section is the text between a
//! literal `## <heading>` line and the next `\n##` (or end of text), a keyed
//! line is the first `- KEY: value` occurrence. Text that drifts from those
//! shapes simply does not match.

use regex::Regex;

/// Returns the body of the first `## <heading>` section.
///
/// The body runs from the line after the heading up to the next `##` heading
/// or the end of the text, and is returned untrimmed.
///
/// # Example
/// ```
/// use recursive_devkit::parser::section_body;
/// let content = "## Definition\nA tool\n\n## Architecture\n- Core";
/// assert_eq!(section_body(content, "Definition"), Some("A tool\n"));
/// assert_eq!(section_body(content, "Dependencies"), None);
/// ```
pub fn section_body<'a>(content: &'a str, heading: &str) -> Option<&'a str> {
    let pattern = format!(r"(?s)## {}\n(.*?)(?:\n##|\z)", regex::escape(heading));
    let re = Regex::new(&pattern).ok()?;
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Value of the first `- KEY: value` line, trimmed
pub fn keyed_value<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    let pattern = format!(r"- {}: ([^\n]*)", regex::escape(key));
    let re = Regex::new(&pattern).ok()?;
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Top-level `- ` bullets of a section body, marker stripped.
///
/// Only lines that start with `- ` once the body as a whole is trimmed count,
/// so indented sub-bullets are skipped.
pub fn bullet_items(body: &str) -> Vec<&str> {
    body.trim()
        .split('\n')
        .filter_map(|line| line.strip_prefix("- "))
        .map(str::trim)
        .collect()
}

/// `1. item` entries of a section body, number stripped
pub fn numbered_items(body: &str) -> Vec<&str> {
    let Ok(re) = Regex::new(r"^\d+\.\s") else {
        return Vec::new();
    };

    body.trim()
        .split('\n')
        .filter_map(|line| re.find(line).map(|m| line[m.end()..].trim()))
        .collect()
}

/// Text of a bullet before its first `:`, trimmed
pub fn label(item: &str) -> &str {
    item.split(':').next().unwrap_or(item).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATE: &str = "# Development State\n\n## High Priority\n- CURRENT TASK: Build parser\n- COMPLETION CRITERIA: Tests pass\n\n## Completed\n- Scaffold\n- CI\n\n## Next Tasks\n1. Lexer\n   - Files: lexer.rs\n2. Grammar\n";

    #[test]
    fn test_section_body_stops_at_next_heading() {
        let body = section_body(STATE, "Completed").unwrap();
        assert_eq!(body, "- Scaffold\n- CI\n");
    }

    #[test]
    fn test_section_body_runs_to_end_of_text() {
        let body = section_body(STATE, "Next Tasks").unwrap();
        assert_eq!(body, "1. Lexer\n   - Files: lexer.rs\n2. Grammar\n");
    }

    #[test]
    fn test_section_body_missing_heading() {
        assert_eq!(section_body(STATE, "Decisions"), None);
    }

    #[test]
    fn test_section_body_requires_exact_heading_text() {
        assert_eq!(section_body(STATE, "completed"), None);
        assert_eq!(section_body("## Completed", "Completed"), None);
    }

    #[test]
    fn test_section_body_escapes_heading() {
        let content = "## Notes (v2)\nbody\n";
        assert_eq!(section_body(content, "Notes (v2)"), Some("body\n"));
    }

    #[test]
    fn test_keyed_value() {
        assert_eq!(keyed_value(STATE, "CURRENT TASK"), Some("Build parser"));
        assert_eq!(keyed_value(STATE, "COMPLETION CRITERIA"), Some("Tests pass"));
        assert_eq!(keyed_value(STATE, "WORKING FILES"), None);
    }

    #[test]
    fn test_keyed_value_keeps_hyphenated_text() {
        let content = "- CURRENT TASK: Wire up read-only mode\n";
        assert_eq!(keyed_value(content, "CURRENT TASK"), Some("Wire up read-only mode"));
    }

    #[test]
    fn test_bullet_items_skip_nested() {
        let body = "- Phase transition\n  - Rationale: done\n- Use SQLite: embedded\n";
        assert_eq!(bullet_items(body), vec!["Phase transition", "Use SQLite: embedded"]);
    }

    #[test]
    fn test_numbered_items() {
        let body = section_body(STATE, "Next Tasks").unwrap();
        assert_eq!(numbered_items(body), vec!["Lexer", "Grammar"]);
    }

    #[test]
    fn test_label() {
        assert_eq!(label("Modularity: small units"), "Modularity");
        assert_eq!(label("Testability"), "Testability");
    }
}
