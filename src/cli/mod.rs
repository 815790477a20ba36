pub mod init;
pub mod phase;
pub mod prompt;
pub mod state;
pub mod status;

use crate::error::DevkitError;
use crate::Result;
use colored::Colorize;

/// Print reportable errors as warnings, propagate the rest
pub(crate) fn report(err: DevkitError) -> Result<()> {
    match err {
        DevkitError::ConfirmationDeclined => {
            println!("{}", "Initialization canceled.".yellow());
            Ok(())
        }
        DevkitError::MissingFile { .. } => {
            println!(
                "{}",
                format!("⚠️  Error: {}. Run 'init' first.", err).yellow()
            );
            Ok(())
        }
        DevkitError::MissingProgress => {
            println!("{}", format!("⚠️  Error: {}. Prompt not written.", err).yellow());
            Ok(())
        }
        other => Err(other.into()),
    }
}
