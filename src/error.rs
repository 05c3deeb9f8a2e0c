use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TempDirError>;

#[derive(Debug, Error)]
pub enum TempDirError {
    /// The proposed directory name contains one of `\ / ? % * : | " < >`.
    #[error("The directory name `{0}` contains invalid characters.")]
    InvalidDirectoryName(String),
    /// `create()` found something at the target path and `force()` was not set.
    #[error("Path `{}` already exists.", .0.display())]
    PathAlreadyExists(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
