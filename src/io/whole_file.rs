//! Whole-file reads and writes.
//!
//! Every operation is one open → operate → close sequence over `std::fs`
//! with no retries and no partial results: a read hands back the fully
//! materialized content or an error, never a prefix. Reads consult
//! [`probe::exists`] first so a missing path is reported as
//! [`Error::NotFound`] rather than a bare I/O failure.
//!
//! Text convention: `read_text` returns the file content verbatim, line
//! separators preserved exactly as stored, so `write_text` followed by
//! `read_text` round-trips any string.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::io::probe;

fn io_error(path: &Path, source: std::io::Error) -> Error {
    if source.kind() == std::io::ErrorKind::NotFound {
        Error::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads the entire file at `path` as UTF-8 text, separators preserved.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !probe::exists(path) {
        warn!("Cannot read {}: it does not exist", path.display());
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|e| {
        warn!("Could not read {}: {}", path.display(), e);
        io_error(path, e)
    })
}

/// Writes `text` verbatim to `path`, truncating any existing content.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, text).map_err(|e| {
        warn!("Could not write {}: {}", path.display(), e);
        io_error(path, e)
    })
}

/// Reads the entire file at `path` into memory as raw bytes.
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    if !probe::exists(path) {
        warn!("Cannot read {}: it does not exist", path.display());
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read(path).map_err(|e| {
        warn!("Could not read {}: {}", path.display(), e);
        io_error(path, e)
    })
}

/// Writes `data` verbatim to `path`, truncating any existing content.
pub fn write_bytes(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, data).map_err(|e| {
        warn!("Could not write {}: {}", path.display(), e);
        io_error(path, e)
    })
}

/// Copies the text content of `src` to `dst`.
///
/// A failed source read propagates and `dst` is left untouched; this never
/// creates an empty destination for an unreadable source.
pub fn duplicate_text(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let text = read_text(src.as_ref())?;
    debug!(
        "Duplicating {} ({} chars) to {}",
        src.as_ref().display(),
        text.len(),
        dst.as_ref().display()
    );
    write_text(dst, &text)
}

/// Copies the raw bytes of `src` to `dst`.
///
/// Same contract as [`duplicate_text`]: an unreadable source propagates
/// before the destination is opened.
pub fn duplicate_bytes(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let data = read_bytes(src.as_ref())?;
    debug!(
        "Duplicating {} ({} bytes) to {}",
        src.as_ref().display(),
        data.len(),
        dst.as_ref().display()
    );
    write_bytes(dst, &data)
}

/// Counts newline-delimited records in the file at `path`.
///
/// Lines are read and discarded one at a time through a buffered reader; a
/// final line without a trailing newline still counts. An empty file is
/// `Ok(0)`, distinct from any error.
pub fn count_lines(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        warn!("Could not open {}: {}", path.display(), e);
        io_error(path, e)
    })?;
    let reader = BufReader::new(file);
    let mut count = 0;
    for line in reader.lines() {
        line.map_err(|e| io_error(path, e))?;
        count += 1;
    }
    Ok(count)
}
