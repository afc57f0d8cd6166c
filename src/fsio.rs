//! Locked, atomic file writes shared by the profile store and config init

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use fs2::FileExt;

/// Open `lock_path` and block until this process holds it exclusively.
///
/// The lock is released when the returned file is dropped.
pub(crate) fn lock_exclusive(lock_path: &Path) -> Result<File> {
    if let Some(parent) = lock_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| format!("Failed to acquire lock: {}", lock_path.display()))?;

    Ok(lock_file)
}

/// Replace `path` with `content` via a sibling `.tmp` file and a rename
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let mut temp_file = File::create(temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
    temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all())
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;

    std::fs::rename(temp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))
}
