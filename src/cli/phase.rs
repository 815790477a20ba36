use crate::models::PhaseUpdate;
use crate::state::DocumentStateManager;
use crate::Result;
use colored::Colorize;

pub fn run(manager: &DocumentStateManager, update: &PhaseUpdate) -> Result<()> {
    let outcome = match manager.update_phase(update) {
        Ok(outcome) => outcome,
        Err(err) => return super::report(err),
    };

    let phase = outcome.phase.as_deref().unwrap_or("(unchanged)");
    println!("{}", format!("✅ Updated project phase: {}", phase).green());
    if let Some(progress) = &outcome.progress {
        println!("   Progress: {}%", progress);
    }

    Ok(())
}
