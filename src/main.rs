use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use recursive_devkit::{
    DocumentStateManager, InitRequest, PhaseUpdate, Result, StateUpdate,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "\
Examples:
  recursive-devkit init \"My Project\" --description \"A new software project\"
  recursive-devkit prompt
  recursive-devkit state --completed \"Implemented basic file structure\" --next \"Create module X\"
  recursive-devkit phase --new \"2/3 - Feature Development\" --progress 0";

#[derive(Parser)]
#[command(name = "recursive-devkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "RecursiveDevKit - Framework for AI-assisted development", long_about = None)]
#[command(after_help = EXAMPLES)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory holding the framework files
    #[arg(long, global = true, env = "DEVKIT_DIR", default_value = ".")]
    dir: PathBuf,

    /// Show debug diagnostics (fallbacks, skipped patches)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new project
    Init {
        /// Name of the project
        project_name: String,

        /// Project description
        #[arg(short, long, default_value = "A software project")]
        description: String,

        /// Number of planned phases
        #[arg(short, long, default_value = "3")]
        phases: String,

        /// Name of the first phase
        #[arg(short, long, default_value = "Initialization")]
        initial_phase: String,

        /// Overwrite existing files without confirmation
        #[arg(short = 'y', long)]
        force: bool,
    },

    /// Generate a new prompt based on current state
    Prompt {
        /// Override the current task focus
        #[arg(short, long)]
        focus: Option<String>,
    },

    /// Update the development state
    State {
        /// Description of completed work
        #[arg(short, long)]
        completed: Option<String>,

        /// Next task to focus on
        #[arg(short, long)]
        next: Option<String>,

        /// Completion criteria for next task
        #[arg(long)]
        criteria: Option<String>,

        /// Working files for next task
        #[arg(long)]
        files: Option<String>,

        /// Integration points for next task
        #[arg(long)]
        integration: Option<String>,

        /// Reset state for new phase
        #[arg(long)]
        reset: bool,
    },

    /// Update the project phase
    Phase {
        /// New phase (e.g., '2/3 - Feature Development')
        #[arg(long)]
        new: Option<String>,

        /// Phase progress percentage (without %)
        #[arg(long)]
        progress: Option<String>,
    },

    /// Show the fields the next prompt would be built from
    Status {
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Commands::Completions { shell } = &command {
        generate(*shell, &mut Cli::command(), "recursive-devkit", &mut io::stdout());
        return Ok(());
    }

    let manager = DocumentStateManager::open(&cli.dir)?;
    tracing::debug!(dir = %cli.dir.display(), "opened project");

    match command {
        Commands::Init {
            project_name,
            description,
            phases,
            initial_phase,
            force,
        } => {
            let request = InitRequest::new(project_name)
                .with_description(description)
                .with_phases(phases)
                .with_initial_phase(initial_phase);
            recursive_devkit::cli::init::run(&manager, &request, force)?;
        }

        Commands::Prompt { focus } => {
            recursive_devkit::cli::prompt::run(&manager, focus.as_deref())?;
        }

        Commands::State {
            completed,
            next,
            criteria,
            files,
            integration,
            reset,
        } => {
            let update = StateUpdate {
                completed,
                next,
                criteria,
                files,
                integration,
                reset,
            };
            recursive_devkit::cli::state::run(&manager, &update)?;
        }

        Commands::Phase { new, progress } => {
            let update = PhaseUpdate {
                phase: new,
                progress,
            };
            recursive_devkit::cli::phase::run(&manager, &update)?;
        }

        Commands::Status { json } => {
            recursive_devkit::cli::status::run(&manager, json)?;
        }

        Commands::Completions { .. } => {
            unreachable!("completions are generated before the project is opened");
        }
    }

    Ok(())
}
