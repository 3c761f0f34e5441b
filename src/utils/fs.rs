use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{map_io_err, ChangeSizeResult};

/// Read a file's contents as string
pub fn read_file_to_string(path: impl AsRef<Path>) -> ChangeSizeResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(map_io_err(path))
}

/// Overwrite a file with string content.
///
/// The file is truncated and written directly. Parent directories are not created.
pub fn write_file_sync(path: impl AsRef<Path>, content: &str) -> ChangeSizeResult<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to file: {}", content.len(), path.display());

    fs::write(path, content).map_err(map_io_err(path))
}
