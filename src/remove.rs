//! Best-effort recursive removal.

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Removes `path` and everything beneath it, returning whether nothing is left.
///
/// Never panics or propagates: failures are logged and reported as `false`.
pub fn remove_all(path: &Path) -> bool {
    match try_remove_all(path) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to remove {}: {}", path.display(), e);
            false
        }
    }
}

/// Same walk as [`remove_all`], but hands back the first error encountered.
///
/// Symlinks are unlinked, never followed. A missing path counts as removed.
pub fn try_remove_all(path: &Path) -> io::Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    let ft = meta.file_type();

    if ft.is_symlink() {
        log::trace!("unlinking {}", path.display());
        return remove_symlink(path);
    }

    if !ft.is_dir() {
        log::trace!("removing file {}", path.display());
        return fs::remove_file(path);
    }

    for entry in WalkDir::new(path).min_depth(1).max_depth(1).follow_links(false) {
        let entry = entry?;
        try_remove_all(entry.path())?;
    }

    log::trace!("removing directory {}", path.display());
    fs::remove_dir(path)
}

#[cfg(not(windows))]
fn remove_symlink(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

// Directory symlinks and junctions on Windows are removed with `RemoveDirectory`.
#[cfg(windows)]
fn remove_symlink(path: &Path) -> io::Result<()> {
    fs::remove_file(path).or_else(|_| fs::remove_dir(path))
}
