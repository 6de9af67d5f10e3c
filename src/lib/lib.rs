pub mod cli;
pub mod project_model;
pub mod template;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::path::Path;

    use color_eyre::eyre::ContextCompat;
    use color_eyre::Result;

    use crate::cli::input::{self, CliArgs};
    use crate::project_model::{self, ProjectConfig};
    use crate::template::{self, error::InstantiationError};
    use crate::utils;
    use crate::utils::constants::{defaults, error_messages};

    /// The main work of the program. Gathers the project configuration from
    /// the CLI arguments (prompting for whatever is missing), asks for
    /// consent before writing into an occupied destination and then runs the
    /// instantiation pass
    pub fn run_stencil(cli_args: &CliArgs) -> Result<()> {
        let mut config = build_project_config(cli_args)?;

        log::info!("Creating a new project at {:?}", config.output_dir);

        if !config.assume_yes && template::output_dir_is_occupied(&config.output_dir)? {
            let authorized = input::confirm(&format!(
                "Directory {:?} is not empty. Continue and write into it?",
                config.output_dir
            ))?;
            if !authorized {
                return Err(InstantiationError::OutputExists(config.output_dir.clone()).into());
            }
            config.assume_yes = true;
        }

        template::instantiate_project(&config)?;
        report_summary(&config);

        Ok(())
    }

    /// Builds the [`ProjectConfig`] consumed by the instantiation pass.
    /// Values given on the command line win; missing ones are prompted for,
    /// or silently defaulted when `-y/--yes` makes the run non-interactive
    fn build_project_config(cli_args: &CliArgs) -> Result<ProjectConfig> {
        let name = match cli_args.name.as_deref() {
            Some(name) => name.trim().to_owned(),
            None if cli_args.assume_yes => String::new(),
            None => input::prompt("Project name (e.g., my-awesome-project)")?,
        };
        let package_name = project_model::derive_package_name(&name)?;

        let description = resolve_field(
            cli_args.description.as_deref(),
            "Project description (A clean Python project)",
            defaults::DESCRIPTION,
            cli_args.assume_yes,
        )?;
        let author = resolve_field(
            cli_args.author.as_deref(),
            "Author name",
            defaults::AUTHOR,
            cli_args.assume_yes,
        )?;
        let email = resolve_field(
            cli_args.email.as_deref(),
            "Author email",
            defaults::EMAIL,
            cli_args.assume_yes,
        )?;

        let github_username = match cli_args.github.as_deref() {
            Some(github) => non_empty(github.trim()),
            None if cli_args.assume_yes => None,
            None => non_empty(&input::prompt("GitHub username (optional)")?),
        };

        let template_dir = utils::fs::get_template_root_absolute_path(
            cli_args.template_dir.as_deref().unwrap_or(Path::new(".")),
        )?;

        let output_dir = match &cli_args.output_dir {
            Some(output_dir) => output_dir.clone(),
            None => template_dir
                .parent()
                .map(|parent| parent.join(&name))
                .with_context(|| error_messages::TEMPLATE_DIR_HAS_NO_PARENT)?,
        };

        Ok(ProjectConfig {
            name,
            package_name,
            description,
            author,
            email,
            github_username,
            template_dir,
            output_dir,
            init_git: !cli_args.no_git,
            skip_cleanup: cli_args.skip_cleanup,
            assume_yes: cli_args.assume_yes,
        })
    }

    fn resolve_field(
        arg: Option<&str>,
        label: &str,
        default: &str,
        assume_yes: bool,
    ) -> Result<String> {
        let value = match arg {
            Some(value) => value.trim().to_owned(),
            None if assume_yes => String::new(),
            None => input::prompt(label)?,
        };

        Ok(if value.is_empty() {
            default.to_owned()
        } else {
            value
        })
    }

    fn non_empty(value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(value.to_owned())
        }
    }

    fn report_summary(config: &ProjectConfig) {
        log::info!("Project setup complete!");
        log::info!("Project: {}", config.name);
        log::info!("Package: {}", config.package_name);
        log::info!("Author:  {} <{}>", config.author, config.email);
        log::info!("Repository: {}", config.repo_url());
        log::info!("Your new Python project is ready at {:?}", config.output_dir);
    }

    #[cfg(test)]
    mod tests {
        use clap::Parser;
        use color_eyre::Result;
        use tempfile::tempdir;

        use super::*;

        #[test]
        fn test_config_from_full_cli_args() -> Result<()> {
            let temp = tempdir()?;
            let template_dir = temp.path().join("template");
            std::fs::create_dir(&template_dir)?;

            let cli_args = CliArgs::parse_from([
                "",
                "--name",
                "My Project",
                "--description",
                "Something useful",
                "--author",
                "Jane Doe",
                "--email",
                "jane@example.com",
                "--github",
                "janedoe",
                "--template-dir",
                template_dir.to_str().unwrap(),
                "--no-git",
                "--skip-cleanup",
                "-y",
            ]);

            let config = build_project_config(&cli_args)?;
            assert_eq!(config.name, "My Project");
            assert_eq!(config.package_name, "my_project");
            assert_eq!(config.description, "Something useful");
            assert_eq!(config.github_username.as_deref(), Some("janedoe"));
            assert!(!config.init_git);
            assert!(config.skip_cleanup);
            assert!(config.assume_yes);
            // compare against the canonicalized location, tempdirs may live
            // behind a symlink
            let expected_parent = template_dir.canonicalize()?.parent().unwrap().to_path_buf();
            assert_eq!(config.output_dir, expected_parent.join("My Project"));

            Ok(())
        }

        #[test]
        fn test_config_defaults_in_non_interactive_mode() -> Result<()> {
            let temp = tempdir()?;
            let template_dir = temp.path().join("template");
            std::fs::create_dir(&template_dir)?;

            let cli_args = CliArgs::parse_from([
                "",
                "--name",
                "demo",
                "--template-dir",
                template_dir.to_str().unwrap(),
                "-y",
            ]);

            let config = build_project_config(&cli_args)?;
            assert_eq!(config.description, "A clean Python project");
            assert_eq!(config.author, "Your Name");
            assert_eq!(config.email, "your.email@example.com");
            assert!(config.github_username.is_none());
            assert!(config.init_git);
            assert!(!config.skip_cleanup);
            assert_eq!(
                config.repo_url(),
                "https://github.com/YOUR_USERNAME/demo"
            );

            Ok(())
        }

        #[test]
        fn test_missing_name_in_non_interactive_mode_is_rejected() -> Result<()> {
            let temp = tempdir()?;
            let cli_args =
                CliArgs::parse_from(["", "--template-dir", temp.path().to_str().unwrap(), "-y"]);

            assert!(build_project_config(&cli_args).is_err());

            Ok(())
        }

        #[test]
        fn test_explicit_output_dir_wins_over_the_sibling_default() -> Result<()> {
            let temp = tempdir()?;
            let template_dir = temp.path().join("template");
            let output_dir = temp.path().join("somewhere/else");
            std::fs::create_dir(&template_dir)?;

            let cli_args = CliArgs::parse_from([
                "",
                "--name",
                "demo",
                "--template-dir",
                template_dir.to_str().unwrap(),
                "--output-dir",
                output_dir.to_str().unwrap(),
                "-y",
            ]);

            let config = build_project_config(&cli_args)?;
            assert_eq!(config.output_dir, output_dir);

            Ok(())
        }
    }
}
