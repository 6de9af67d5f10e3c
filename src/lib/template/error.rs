//! The failure kinds of the instantiation pass. Each stage of the protocol
//! maps to one variant, so the user always learns at which stage a run died

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstantiationError {
    #[error("invalid project name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("output directory {0:?} already exists and is not empty")]
    OutputExists(PathBuf),

    #[error("copy stage failed on {path:?}")]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot rename the package directory: {0:?} already exists")]
    RenameConflict(PathBuf),

    #[error("git {operation} failed: {detail}")]
    Git {
        operation: &'static str,
        detail: String,
    },
}
