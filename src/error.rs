use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a run, each mapped to a process exit code
#[derive(Debug, Error)]
pub enum TofiError {
    /// Nothing left to scan after expanding the arguments
    #[error("the following arguments are required: <PATH>...")]
    NoFiles,

    #[error("{} is neither file nor directory", .0.display())]
    InvalidPath(PathBuf),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TofiError {
    pub fn exit_code(&self) -> u8 {
        match self {
            TofiError::NoFiles | TofiError::InvalidPath(_) => 2,
            TofiError::Config(_) | TofiError::Other(_) => 1,
        }
    }
}
