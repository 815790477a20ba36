use crate::state::DocumentStateManager;
use crate::Result;
use colored::Colorize;

pub fn run(manager: &DocumentStateManager, focus: Option<&str>) -> Result<()> {
    let outcome = match manager.regenerate_prompt(focus) {
        Ok(outcome) => outcome,
        Err(err) => return super::report(err),
    };

    println!(
        "{}",
        format!("✅ Updated prompt for task: {}", outcome.current_task).green()
    );
    println!("   Prompt saved to {}", outcome.path.display());

    Ok(())
}
