//! Fluent creation and cleanup of temporary directories.

pub mod config;
pub mod error;
pub mod naming;
pub mod remove;
pub mod temp_dir;

pub use config::TempDirConfig;
pub use error::{Result, TempDirError};
pub use naming::{generate_name, is_valid_directory_name};
pub use temp_dir::TempDirectory;
