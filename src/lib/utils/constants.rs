//! Constant value definitions to use across the whole program

/// The placeholder tokens baked into the clean-python template files.
/// Every occurrence in a text file of the generated project is replaced
/// with the value gathered for the new project
pub mod placeholders {
    pub const PROJECT_NAME: &str = "clean-python";
    pub const PACKAGE_NAME: &str = "clean_python";
    pub const DESCRIPTION: &str = "A clean Python project";
    pub const PACKAGE_DOCSTRING: &str = "Clean Python package with best practices.";
    pub const AUTHOR: &str = "Your Name";
    pub const EMAIL: &str = "your.email@example.com";
    pub const GITHUB_USERNAME: &str = "YOUR_USERNAME";
}

pub mod dir_names {
    pub const SOURCES: &str = "src";
    pub const GIT_METADATA: &str = ".git";
}

pub mod defaults {
    pub const DESCRIPTION: &str = "A clean Python project";
    pub const AUTHOR: &str = "Your Name";
    pub const EMAIL: &str = "your.email@example.com";
}

/// Directory and file names never copied from the template into a
/// generated project
pub const COPY_EXCLUSIONS: [&str; 8] = [
    ".git",
    "__pycache__",
    ".pytest_cache",
    ".venv",
    "venv",
    "env",
    "htmlcov",
    ".coverage",
];

/// Extensions of entries never copied from the template
pub const EXCLUDED_EXTENSIONS: [&str; 1] = ["pyc"];

/// Files that only make sense inside the template itself. They are copied
/// along with the rest of the tree and removed by the cleanup stage, so
/// that `--skip-cleanup` is able to retain them
pub const TEMPLATE_ONLY_FILES: [&str; 2] = ["setup_new_project.py", "test_integration.py"];

/// Extensions always treated as binary by the substitution pass, without
/// sniffing their content
pub const BINARY_EXTENSIONS: [&str; 14] = [
    "png", "jpg", "jpeg", "gif", "ico", "pdf", "zip", "gz", "whl", "so", "pyd", "woff", "woff2",
    "ttf",
];

pub mod error_messages {
    pub const FAILURE_GATHERING_TEMPLATE_ROOT_ABS_PATH: &str =
        "Failed to resolve the absolute path of the template directory";
    pub const READ_TEMPLATE_FILE: &str = "Could not read the template file";
    pub const WRITE_TEMPLATE_FILE: &str = "Could not write the customized file";
    pub const STDIN_READ: &str = "Could not read the answer from stdin";
    pub const TEMPLATE_DIR_HAS_NO_PARENT: &str =
        "The template directory has no parent directory where the default output \
        location could be placed. Pass --output-dir explicitly";
}
