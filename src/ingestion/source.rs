//! Shared path handling for the loaders.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::ExtractResult;

/// Open `path` for reading, requiring it to be a regular file.
///
/// The returned handle is owned by the caller's scope and closed when dropped, including on
/// early `?` returns.
pub fn open_regular_file(path: &Path) -> ExtractResult<File> {
    let file = File::open(path).map_err(|e| with_path(path, e))?;
    let meta = file.metadata().map_err(|e| with_path(path, e))?;
    if !meta.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: not a regular file", path.display()),
        )
        .into());
    }
    Ok(file)
}

fn with_path(path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {err}", path.display()))
}
