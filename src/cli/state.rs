use crate::models::StateUpdate;
use crate::state::DocumentStateManager;
use crate::Result;
use colored::Colorize;

pub fn run(manager: &DocumentStateManager, update: &StateUpdate) -> Result<()> {
    let outcome = match manager.update_state(update) {
        Ok(outcome) => outcome,
        Err(err) => return super::report(err),
    };

    let action = if outcome.reset { "Reset" } else { "Updated" };
    println!("{}", format!("✅ {} development state", action).green());
    if let Some(completed) = &outcome.completed {
        println!("   Marked task as completed: {}", completed);
    }
    if let Some(next) = &outcome.next {
        println!("   New current task: {}", next);
    }

    Ok(())
}
