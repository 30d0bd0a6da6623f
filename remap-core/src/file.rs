//! Output file writing.

use std::path::Path;

use eyre::Result;

/// Write `content` to `path`, creating parent directories as needed.
///
/// The artifact is written in one shot; sequencing across a run is guaranteed
/// by single-threaded execution order.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
