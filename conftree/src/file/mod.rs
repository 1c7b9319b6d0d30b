//! File access behind [`crate::Root::load_file`].
//!
//! A configuration path is split into its directory and file name; the
//! directory is opened as a `cap-std` handle and only the named entry is read
//! through it.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};

use crate::{ConfigError, ConfigResult};

/// Directory that holds `path`. A bare file name lives in `.`.
fn containing_dir(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    }
}

fn split_source(path: &Utf8Path) -> io::Result<(Dir, &str)> {
    let Some(name) = path.file_name() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{path}' does not name a file"),
        ));
    };
    let dir = Dir::open_ambient_dir(containing_dir(path), ambient_authority())?;
    Ok((dir, name))
}

/// Read the configuration file at `path` into a string.
///
/// # Errors
///
/// Returns [`ConfigError::SourceNotFound`] when the file or its directory is
/// missing, and [`ConfigError::File`] for any other read failure.
pub(crate) fn read_source(path: &Utf8Path) -> ConfigResult<String> {
    let read = split_source(path).and_then(|(dir, name)| {
        if dir.is_file(name) {
            dir.read_to_string(name)
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "not a regular file"))
        }
    });
    read.map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ConfigError::source_not_found(path),
        _ => ConfigError::file(path, err),
    })
}
