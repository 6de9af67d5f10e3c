use std::{
    fs::{DirBuilder, File},
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};

use crate::utils::constants::error_messages;

pub fn create_file<'a>(path: &Path, filename: &'a str, buff_write: &'a [u8]) -> Result<()> {
    let file_path = path.join(filename);

    File::create(&file_path)
        .with_context(|| format!("Could not create file {file_path:?}"))?
        .write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))
}

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Returns the absolute, canonicalized path of the template root, so that
/// every later stage works with unambiguous locations
pub fn get_template_root_absolute_path(template_root: &Path) -> Result<PathBuf> {
    template_root
        .canonicalize()
        .with_context(|| error_messages::FAILURE_GATHERING_TEMPLATE_ROOT_ABS_PATH)
}
