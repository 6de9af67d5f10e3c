use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::{eyre::Context, Result};

use crate::utils::constants::error_messages;

/// [`CliArgs`] is the command line arguments parser.
///
/// Every metadata value left out on the command line is asked for
/// interactively, unless `-y/--yes` turns the run fully non-interactive
/// and the defaults are taken instead.
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use stencil::cli::input::CliArgs;
///
/// let parser = CliArgs::parse_from(["", "-v"]);
/// assert_eq!(1, parser.verbose);
///
/// let parser = CliArgs::parse_from(["", "--name", "my-project", "--no-git", "-y"]);
/// assert_eq!(parser.name.as_deref(), Some("my-project"));
/// assert!(parser.no_git);
/// assert!(parser.assume_yes);
/// assert!(!parser.skip_cleanup);
/// ```
#[derive(Parser, Debug, Default)]
#[command(name = "stencil")]
#[command(version)]
#[command(
    about = "Instantiates a new Python project from the clean-python template",
    long_about = "stencil copies the clean-python template into a fresh directory, rewrites \
    the placeholder metadata with your project details, renames the package and optionally \
    starts a new git history"
)]
pub struct CliArgs {
    #[arg(long, help = "Project name (e.g., my-awesome-project)")]
    pub name: Option<String>,

    #[arg(long, help = "Project description (default: 'A clean Python project')")]
    pub description: Option<String>,

    #[arg(long, help = "Author name")]
    pub author: Option<String>,

    #[arg(long, help = "Author email")]
    pub email: Option<String>,

    #[arg(long, help = "GitHub username (optional)")]
    pub github: Option<String>,

    #[arg(
        long,
        help = "Template directory to instantiate (default: the current directory)"
    )]
    pub template_dir: Option<PathBuf>,

    #[arg(
        long,
        help = "Directory to create the new project in (default: ../<project-name>)"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Skip git repository initialization")]
    pub no_git: bool,

    #[arg(long, help = "Keep the template-only files (don't remove the setup artifacts)")]
    pub skip_cleanup: bool,

    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip the interactive prompts and confirmations, taking the defaults"
    )]
    pub assume_yes: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "stencil maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,
}

/// Asks the user for a single value on stdin. An empty line means
/// "take the default", which is up to the caller
pub fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout()
        .flush()
        .with_context(|| "Could not flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .with_context(|| error_messages::STDIN_READ)?;

    Ok(answer.trim().to_owned())
}

/// Asks a yes/no question, defaulting to "no". EOF on stdin counts as a
/// refusal, so a piped run never silently overwrites anything
pub fn confirm(question: &str) -> Result<bool> {
    let answer = prompt(&format!("{question} (y/N)"))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
