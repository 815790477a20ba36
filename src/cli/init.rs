use crate::confirm::{Confirmer, FixedAnswer, TerminalConfirm};
use crate::models::InitRequest;
use crate::state::DocumentStateManager;
use crate::Result;
use colored::Colorize;

pub fn run(manager: &DocumentStateManager, request: &InitRequest, force: bool) -> Result<()> {
    let forced = FixedAnswer(true);
    let confirmer: &dyn Confirmer = if force {
        &forced
    } else {
        &TerminalConfirm
    };

    let outcome = match manager.initialize(request, confirmer) {
        Ok(outcome) => outcome,
        Err(err) => return super::report(err),
    };

    println!(
        "{}",
        format!(
            "✅ Initialized {} with RecursiveDevKit framework",
            outcome.project_name
        )
        .green()
    );
    for path in &outcome.created {
        println!("   Created: {}", path.display());
    }

    println!();
    println!("{}", "⏭️  Next Steps:".yellow().bold());
    println!("   1. Fill in the Definition and Architecture sections");
    println!("   2. Record progress with {}", "state --completed \"...\" --next \"...\"".cyan());
    println!("   3. Regenerate the prompt with {}", "prompt".cyan());

    Ok(())
}
