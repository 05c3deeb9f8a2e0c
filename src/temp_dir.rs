use crate::config::TempDirConfig;
use crate::error::{Result, TempDirError};
use crate::naming::{generate_name, is_separator, sanitize_location, sanitize_name};
use crate::remove::{remove_all, try_remove_all};
use std::fs::{self, DirBuilder};
use std::io;
use std::path::{Path, PathBuf};

/// A temporary directory, configured fluently and then created on disk.
///
/// ```no_run
/// # fn main() -> tempdir_builder::Result<()> {
/// use tempdir_builder::TempDirectory;
///
/// let dir = TempDirectory::default()
///     .with_name("render-cache")?
///     .force()
///     .delete_on_drop(true)
///     .create()?;
/// let frame = dir.path("frames/0001.png")?;
/// # Ok(())
/// # }
/// ```
///
/// With `delete_on_drop(true)` the full path is removed when the handle is
/// dropped, whether or not `create()` was called. A `create()` that fails with
/// [`TempDirError::PathAlreadyExists`] or a rejected `with_name()` never
/// deletes anything.
#[derive(Debug, Default)]
pub struct TempDirectory {
    location: PathBuf,
    name: String,
    force_create: bool,
    delete_on_drop: bool,
    /// Set once drop-time cleanup has run or been ruled out.
    cleaned_up: bool,
}

impl TempDirectory {
    pub fn new(location: impl AsRef<Path>) -> Self {
        Self::default().with_location(location)
    }

    /// Shorthand for `TempDirectory::new(location).create()`.
    pub fn make(location: impl AsRef<Path>) -> Result<Self> {
        Self::new(location).create()
    }

    /// Builds an uncreated handle from a parsed config.
    pub fn from_config(config: &TempDirConfig) -> Result<Self> {
        let mut dir = Self::new(config.location.as_deref().unwrap_or(""))
            .delete_on_drop(config.delete_on_drop);
        if let Some(name) = &config.name {
            dir = dir.with_name(name)?;
        }
        if config.force {
            dir = dir.force();
        }
        Ok(dir)
    }

    pub fn config(&self) -> TempDirConfig {
        let location = self.location.to_string_lossy();
        TempDirConfig {
            location: (!location.is_empty()).then(|| location.into_owned()),
            name: (!self.name.is_empty()).then(|| self.name.clone()),
            force: self.force_create,
            delete_on_drop: self.delete_on_drop,
        }
    }

    pub fn with_location(mut self, location: impl AsRef<Path>) -> Self {
        self.location = sanitize_path(location.as_ref());
        self
    }

    pub fn with_name(mut self, name: &str) -> Result<Self> {
        match sanitize_name(name) {
            Ok(name) => {
                self.name = name;
                Ok(self)
            }
            Err(e) => {
                self.cleaned_up = true;
                Err(e)
            }
        }
    }

    /// Replace whatever already sits at the target path on `create()`.
    pub fn force(mut self) -> Self {
        self.force_create = true;
        self
    }

    pub fn delete_on_drop(mut self, delete_on_drop: bool) -> Self {
        self.delete_on_drop = delete_on_drop;
        self
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_forced(&self) -> bool {
        self.force_create
    }

    pub fn deletes_on_drop(&self) -> bool {
        self.delete_on_drop
    }

    pub fn full_path(&self) -> PathBuf {
        if self.name.is_empty() {
            self.location.clone()
        } else {
            self.location.join(&self.name)
        }
    }

    /// Resolves defaults and creates the directory.
    ///
    /// Fails with [`TempDirError::PathAlreadyExists`] if something is already
    /// at the target and `force()` was not set.
    pub fn create(mut self) -> Result<Self> {
        if self.location.as_os_str().is_empty() {
            self.location = sanitize_path(&std::env::temp_dir());
        }
        if self.name.is_empty() {
            self.name = generate_name();
        }

        let full_path = self.full_path();

        if self.force_create && fs::symlink_metadata(&full_path).is_ok() {
            log::debug!("force: clearing existing {}", full_path.display());
            remove_all(&full_path);
        }

        // A dangling symlink counts as taken.
        if fs::symlink_metadata(&full_path).is_ok() {
            self.cleaned_up = true;
            return Err(TempDirError::PathAlreadyExists(full_path));
        }

        make_dir_all(&full_path)?;
        log::debug!("created temporary directory {}", full_path.display());

        Ok(self)
    }

    /// Returns a path inside the directory, creating the directories it needs.
    ///
    /// If the last segment contains a `.` it is taken to be a file name: only
    /// its parent directories are created. Otherwise the whole path is created
    /// as a directory.
    pub fn path(&self, relative: &str) -> Result<PathBuf> {
        let full_path = self.full_path();
        let relative = relative.trim().trim_matches(is_separator);
        if relative.is_empty() {
            return Ok(full_path);
        }

        let path = full_path.join(relative);
        let dir = if looks_like_file(relative) {
            path.parent().map(Path::to_path_buf).unwrap_or(full_path)
        } else {
            path.clone()
        };

        if !dir.exists() {
            make_dir_all(&dir)?;
        }

        Ok(path)
    }

    pub fn exists(&self) -> bool {
        self.full_path().exists()
    }

    /// Removes all contents, leaving an empty directory behind.
    pub fn empty(&mut self) -> Result<&mut Self> {
        let full_path = self.full_path();
        remove_all(&full_path);
        make_dir_all(&full_path)?;
        log::debug!("emptied {}", full_path.display());
        Ok(self)
    }

    /// Recursively deletes the directory. `true` means nothing is left.
    pub fn delete(&self) -> bool {
        let full_path = self.full_path();
        log::debug!("deleting {}", full_path.display());
        remove_all(&full_path)
    }

    /// Like [`delete`](Self::delete), but reports the first failure.
    pub fn try_delete(&self) -> io::Result<()> {
        try_remove_all(&self.full_path())
    }

    /// Runs drop-time cleanup now and reports whether it succeeded.
    ///
    /// Returns `true` when no cleanup was due.
    pub fn close(mut self) -> bool {
        self.cleanup()
    }

    fn cleanup(&mut self) -> bool {
        if self.cleaned_up || !self.delete_on_drop {
            return true;
        }
        self.cleaned_up = true;
        self.delete()
    }
}

impl Drop for TempDirectory {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn sanitize_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(sanitize_location(s)),
        None => path.to_path_buf(),
    }
}

// `v1.2` counts as a file name too.
fn looks_like_file(relative: &str) -> bool {
    relative
        .rsplit(is_separator)
        .next()
        .map_or(false, |segment| segment.contains('.'))
}

fn make_dir_all(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(path)
}
