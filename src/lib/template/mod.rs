//! The instantiation pass: turns the clean-python template tree into a new,
//! fully customized project directory.
//!
//! The protocol is strictly sequential and runs exactly once per
//! invocation:
//!
//! Validate -> Copy -> Substitute -> RenamePackage -> InitVersionControl
//! -> Cleanup
//!
//! There are no retries and no rollback. A failure after the copy stage
//! leaves a partially customized tree on disk for manual inspection, which
//! mirrors the behaviour of the original template's setup script

pub mod error;

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use color_eyre::eyre::Context;
use color_eyre::Result;
use walkdir::{DirEntry, WalkDir};

use crate::project_model::{self, ProjectConfig};
use crate::utils;
use crate::utils::constants::{
    dir_names, error_messages, placeholders, BINARY_EXTENSIONS, COPY_EXCLUSIONS,
    EXCLUDED_EXTENSIONS, TEMPLATE_ONLY_FILES,
};

use self::error::InstantiationError;

/// Runs the whole instantiation protocol for an already gathered
/// [`ProjectConfig`]
pub fn instantiate_project(config: &ProjectConfig) -> Result<()> {
    validate(config)?;

    log::info!(
        "Copying the template from {:?} to {:?}",
        config.template_dir,
        config.output_dir
    );
    copy_template_tree(&config.template_dir, &config.output_dir)?;

    log::info!("Customizing the project files");
    substitute_placeholders(&config.output_dir, config)?;
    rename_package_directory(&config.output_dir, &config.package_name)?;

    if config.init_git {
        initialize_git_repository(config)?;
    } else {
        log::info!("Skipping git initialization");
    }

    if config.skip_cleanup {
        log::info!("Skipping cleanup, keeping the template-only files");
    } else {
        cleanup_template_files(&config.output_dir)?;
    }

    Ok(())
}

/// Checks that the project name is usable and that the run will not
/// clobber an existing non-empty output directory, unless the caller
/// already authorized that via `-y/--yes` or the interactive confirmation
pub fn validate(config: &ProjectConfig) -> Result<()> {
    project_model::derive_package_name(&config.name)?;

    if output_dir_is_occupied(&config.output_dir)? && !config.assume_yes {
        return Err(InstantiationError::OutputExists(config.output_dir.clone()).into());
    }

    Ok(())
}

/// `true` when something already lives at the output location. An empty
/// directory does not block the run; a regular file at that path does
pub fn output_dir_is_occupied(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    if !path.is_dir() {
        return Ok(true);
    }

    let has_entries = path
        .read_dir()
        .with_context(|| format!("Directory {path:?} is not readable"))?
        .next()
        .is_some();

    Ok(has_entries)
}

/// Recursively duplicates the template tree into the destination, skipping
/// version-control metadata, cached bytecode and virtualenv directories.
/// Any I/O failure aborts the run before customization begins
pub fn copy_template_tree(template_dir: &Path, output_dir: &Path) -> Result<()> {
    utils::fs::create_directory(output_dir)?;

    let walker = WalkDir::new(template_dir).min_depth(1).into_iter();
    for entry in walker.filter_entry(|e| !is_excluded_from_copy(e)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .unwrap_or(template_dir)
                    .to_path_buf();
                return Err(InstantiationError::Copy {
                    path,
                    source: walk_error_to_io(e),
                }
                .into());
            }
        };

        let relative = entry
            .path()
            .strip_prefix(template_dir)
            .with_context(|| format!("Walked outside of the template tree: {:?}", entry.path()))?;
        let target = output_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| InstantiationError::Copy {
                path: target.clone(),
                source,
            })?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target).map_err(|source| InstantiationError::Copy {
                path: entry.path().to_path_buf(),
                source,
            })?;
        } else {
            log::debug!("Skipping non-regular entry {:?}", entry.path());
        }
    }

    Ok(())
}

fn walk_error_to_io(e: walkdir::Error) -> io::Error {
    e.into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop detected"))
}

fn is_excluded_from_copy(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    if COPY_EXCLUSIONS.contains(&name.as_ref()) {
        return true;
    }

    entry
        .path()
        .extension()
        .map(|ext| EXCLUDED_EXTENSIONS.contains(&ext.to_string_lossy().as_ref()))
        .unwrap_or(false)
}

/// Rewrites every placeholder token in every text file under the
/// destination. File-local and order independent, so visiting order does
/// not matter, and running it twice is a no-op
pub fn substitute_placeholders(output_dir: &Path, config: &ProjectConfig) -> Result<()> {
    let walker = WalkDir::new(output_dir).into_iter();
    for entry in
        walker.filter_entry(|e| e.file_name().to_string_lossy() != dir_names::GIT_METADATA)
    {
        let entry =
            entry.with_context(|| "The generated tree became unreadable during substitution")?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if has_binary_extension(path) {
            log::debug!("Skipping binary file {path:?}");
            continue;
        }

        let raw = fs::read(path)
            .with_context(|| format!("{}: {path:?}", error_messages::READ_TEMPLATE_FILE))?;
        if raw.contains(&0) {
            log::debug!("Skipping binary content in {path:?}");
            continue;
        }
        let Ok(content) = String::from_utf8(raw) else {
            log::debug!("Skipping non UTF-8 file {path:?}");
            continue;
        };

        let customized = apply_tokens(&content, config);
        if customized != content {
            fs::write(path, customized)
                .with_context(|| format!("{}: {path:?}", error_messages::WRITE_TEMPLATE_FILE))?;
            log::debug!("Updated {path:?}");
        }
    }

    Ok(())
}

fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| BINARY_EXTENSIONS.contains(&ext.to_string_lossy().as_ref()))
        .unwrap_or(false)
}

/// Replaces each placeholder token of the template with the configured
/// value. The package docstring goes first since it is the only multi-word
/// token that embeds another project name variant
fn apply_tokens(content: &str, config: &ProjectConfig) -> String {
    let mut customized = content
        .replace(placeholders::PACKAGE_DOCSTRING, &config.description)
        .replace(placeholders::DESCRIPTION, &config.description)
        .replace(placeholders::PROJECT_NAME, &config.name)
        .replace(placeholders::PACKAGE_NAME, &config.package_name)
        .replace(placeholders::AUTHOR, &config.author)
        .replace(placeholders::EMAIL, &config.email);

    if let Some(github_username) = &config.github_username {
        customized = customized.replace(placeholders::GITHUB_USERNAME, github_username);
    }

    customized
}

/// Renames `src/clean_python` to `src/<package_name>`. A template without
/// the package directory is tolerated with a warning; an already existing
/// target directory is a conflict and aborts the run
pub fn rename_package_directory(output_dir: &Path, package_name: &str) -> Result<()> {
    let sources = output_dir.join(dir_names::SOURCES);
    let old_package = sources.join(placeholders::PACKAGE_NAME);
    let new_package = sources.join(package_name);

    if !old_package.exists() {
        log::warn!(
            "Package directory {:?} not found in the template, skipping the rename",
            old_package
        );
        return Ok(());
    }
    if package_name == placeholders::PACKAGE_NAME {
        return Ok(());
    }
    if new_package.exists() {
        return Err(InstantiationError::RenameConflict(new_package).into());
    }

    fs::rename(&old_package, &new_package)
        .with_context(|| format!("Could not rename {old_package:?} to {new_package:?}"))?;
    log::info!("Renamed the package directory to src/{package_name}");

    Ok(())
}

/// Wipes any version-control metadata inherited from the destination and
/// starts a fresh repository with a single commit covering the whole
/// customized tree
pub fn initialize_git_repository(config: &ProjectConfig) -> Result<()> {
    let git_metadata = config.output_dir.join(dir_names::GIT_METADATA);
    if git_metadata.exists() {
        fs::remove_dir_all(&git_metadata)
            .with_context(|| format!("Could not remove the stale {git_metadata:?} directory"))?;
        log::debug!("Removed pre-existing version-control metadata");
    }

    run_git_command(&config.output_dir, &["init"], "init")?;
    run_git_command(&config.output_dir, &["add", "."], "add")?;
    run_git_command(
        &config.output_dir,
        &[
            "commit",
            "-m",
            &format!("Initial project setup for {}", config.name),
        ],
        "commit",
    )?;
    log::info!("Initialized a new git repository with the initial commit");

    Ok(())
}

fn run_git_command(project_root: &Path, args: &[&str], operation: &'static str) -> Result<()> {
    let exit_status = Command::new("git")
        .current_dir(project_root)
        .args(args)
        .spawn()
        .with_context(|| format!("Could not run \"git {operation}\""))?
        .wait()
        .with_context(|| {
            format!("An error occurred while waiting for \"git {operation}\" to finish")
        })?;

    match exit_status.code() {
        Some(0) => Ok(()),
        None => Err(InstantiationError::Git {
            operation,
            detail: "the process was terminated by an external signal".to_owned(),
        }
        .into()),
        Some(error_code) => Err(InstantiationError::Git {
            operation,
            detail: format!("the process exited with status code {error_code}"),
        }
        .into()),
    }
}

/// Deletes the files that only belong to the template itself from the
/// generated project
pub fn cleanup_template_files(output_dir: &Path) -> Result<()> {
    for template_file in TEMPLATE_ONLY_FILES {
        let path = output_dir.join(template_file);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Could not remove the template file {path:?}"))?;
            log::info!("Removed template file: {template_file}");
        }
    }

    Ok(())
}
