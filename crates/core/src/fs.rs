//! Filesystem checks

use std::path::Path;

use log::debug;

/// Check if a path exists and is a regular file
pub fn is_file(path: &str) -> bool {
    let is_file = Path::new(path).is_file();
    if !is_file {
        debug!("not a regular file: {}", path);
    }
    is_file
}
