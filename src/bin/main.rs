use clap::Parser;
use color_eyre::Result;
use env_logger::Target;
use stencil::{cli::input::CliArgs, utils::logger::config_logger, worker::run_stencil};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stdout).expect("Error configuring the logger");

    log::info!("Launching a new stencil run");
    run_stencil(&cli_args)?;
    log::info!("Tasks successfully finished");

    Ok(())
}
