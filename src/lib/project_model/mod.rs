//! The read-only data that describes the project being instantiated,
//! gathered once per invocation from the CLI arguments and the interactive
//! prompts and then consumed by the instantiation pass

use std::path::PathBuf;

use color_eyre::{eyre::Context, Result};
use regex::Regex;

use crate::template::error::InstantiationError;
use crate::utils::constants::placeholders;

/// [`ProjectConfig`] holds every value needed to turn the template into a
/// concrete project. It is built once, validated, and then only read
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Human readable project name, e.g. `my-awesome-project`
    pub name: String,
    /// The normalized, code-safe identifier derived from [`Self::name`],
    /// used as the Python package directory name
    pub package_name: String,
    pub description: String,
    pub author: String,
    pub email: String,
    pub github_username: Option<String>,
    /// Root of the template tree being instantiated
    pub template_dir: PathBuf,
    /// Where the new project tree is created
    pub output_dir: PathBuf,
    pub init_git: bool,
    pub skip_cleanup: bool,
    pub assume_yes: bool,
}

impl ProjectConfig {
    /// The repository URL substituted into the project metadata. Falls back
    /// to the `YOUR_USERNAME` placeholder when no GitHub username was given,
    /// so the generated files still carry an obvious marker to fill in
    pub fn repo_url(&self) -> String {
        let user = self
            .github_username
            .as_deref()
            .unwrap_or(placeholders::GITHUB_USERNAME);
        format!("https://github.com/{user}/{}", self.name)
    }

    pub fn issues_url(&self) -> String {
        format!("{}/issues", self.repo_url())
    }
}

/// Derives the package identifier for a project name: lowercased, every
/// character outside `[a-z0-9_]` becomes an underscore, and a leading digit
/// is replaced since a Python module name cannot start with one.
///
/// Fails with [`InstantiationError::InvalidName`] when the name is empty,
/// contains a path separator, or normalizes to nothing usable
pub fn derive_package_name(project_name: &str) -> Result<String> {
    if project_name.trim().is_empty() {
        return Err(InstantiationError::InvalidName {
            name: project_name.to_owned(),
            reason: "the project name cannot be empty",
        }
        .into());
    }
    if project_name.contains(['/', '\\']) {
        return Err(InstantiationError::InvalidName {
            name: project_name.to_owned(),
            reason: "the project name cannot contain path separators",
        }
        .into());
    }

    let sanitizer = Regex::new(r"[^a-z0-9_]")
        .with_context(|| "Failed to compile the package name sanitizer")?;
    let mut package_name = sanitizer
        .replace_all(&project_name.to_lowercase(), "_")
        .into_owned();

    if let Some(first) = package_name.chars().next() {
        if first.is_ascii_digit() {
            package_name.replace_range(0..1, "_");
        }
    }

    if package_name.chars().all(|c| c == '_') {
        return Err(InstantiationError::InvalidName {
            name: project_name.to_owned(),
            reason: "the project name does not contain any usable character",
        }
        .into());
    }

    Ok(package_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_from_spaced_name() -> Result<()> {
        assert_eq!(derive_package_name("My Project")?, "my_project");
        Ok(())
    }

    #[test]
    fn test_package_name_from_kebab_case() -> Result<()> {
        assert_eq!(derive_package_name("my-awesome-project")?, "my_awesome_project");
        Ok(())
    }

    #[test]
    fn test_package_name_leading_digit_is_replaced() -> Result<()> {
        assert_eq!(derive_package_name("123abc")?, "_23abc");
        Ok(())
    }

    #[test]
    fn test_package_name_non_ascii_chars_are_sanitized() -> Result<()> {
        assert_eq!(derive_package_name("café corner")?, "caf__corner");
        Ok(())
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(derive_package_name("").is_err());
        assert!(derive_package_name("   ").is_err());
    }

    #[test]
    fn test_path_separators_are_rejected() {
        assert!(derive_package_name("my/project").is_err());
        assert!(derive_package_name("my\\project").is_err());
    }

    #[test]
    fn test_name_without_usable_chars_is_rejected() {
        assert!(derive_package_name("---").is_err());
    }

    #[test]
    fn test_repo_url_fallback_placeholder() {
        let config = ProjectConfig {
            name: "demo".into(),
            package_name: "demo".into(),
            description: String::new(),
            author: String::new(),
            email: String::new(),
            github_username: None,
            template_dir: PathBuf::new(),
            output_dir: PathBuf::new(),
            init_git: true,
            skip_cleanup: false,
            assume_yes: false,
        };
        assert_eq!(config.repo_url(), "https://github.com/YOUR_USERNAME/demo");
        assert_eq!(
            config.issues_url(),
            "https://github.com/YOUR_USERNAME/demo/issues"
        );
    }
}
