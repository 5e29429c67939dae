//! Point-in-time probes of a filesystem path: existence, type, emptiness,
//! and extension-based classification.
//!
//! Nothing here caches: every answer reflects the filesystem at call time and
//! may be stale the moment it is returned. Coordinating with concurrent
//! mutation is the caller's problem.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// True iff `path` names an existing filesystem entry.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// True iff `path` names an existing directory.
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_dir()
}

/// True iff `path` names an existing regular file.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_file()
}

/// True iff `path` is an existing directory with zero entries.
///
/// Anything else (a file, a missing path, or a directory whose listing
/// cannot be read) is reported as `false`.
pub fn directory_is_empty(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if !is_directory(path) {
        return false;
    }
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(e) => {
            warn!("Could not list {}: {}", path.display(), e);
            false
        }
    }
}

/// Creates a single directory level at `path`.
///
/// A no-op returning `Ok(())` when the path already exists. Creation is not
/// recursive; a missing parent is an error.
pub fn create_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        debug!("{} already exists, nothing to create", path.display());
        return Ok(());
    }
    fs::create_dir(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Returns the extension of `path`, dot-prefixed.
///
/// The contract is a literal split of the whole path string on `.`: the final
/// segment is returned with a leading dot, so `"archive.tar.gz"` yields
/// `".gz"` and a name with no dot at all yields itself dot-prefixed
/// (`"noext"` yields `".noext"`). Directories have no extension and are an
/// error; a path that is missing or not a regular file still yields the
/// split result.
pub fn extension(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if is_directory(path) {
        warn!("Cannot take the extension of directory {}", path.display());
        return Err(Error::IsADirectory {
            path: path.to_path_buf(),
        });
    }
    if !is_file(path) {
        debug!("{} is not an existing file", path.display());
    }
    let text = path.to_string_lossy();
    let last = text.rsplit('.').next().unwrap_or_default();
    Ok(format!(".{last}"))
}

/// True iff `path` carries the `.gz` extension. Convention only, no sniffing.
pub fn is_gzip_compressed(path: impl AsRef<Path>) -> bool {
    matches!(extension(path).as_deref(), Ok(".gz"))
}

/// True iff `path` carries the `.txt` extension.
pub fn is_text_file(path: impl AsRef<Path>) -> bool {
    matches!(extension(path).as_deref(), Ok(".txt"))
}

/// True iff `path` carries the `.dat` extension.
pub fn is_binary_file(path: impl AsRef<Path>) -> bool {
    matches!(extension(path).as_deref(), Ok(".dat"))
}
