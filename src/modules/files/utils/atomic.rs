//! Atomic file replacement

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::modules::error::ModuleError;

/// Write `data` to a uniquely named temporary file next to `target` and
/// rename it over `target`, so readers never observe a partially written
/// file and concurrent writers never share a temporary file
pub fn write_atomic(target: &Path, data: &[u8]) -> Result<(), ModuleError> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| ModuleError::io("create", dir, e))?;
    temp.write_all(data)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| ModuleError::io("write", temp.path(), e))?;

    keep_permissions(temp.as_file(), target)
        .map_err(|e| ModuleError::io("chmod", temp.path(), e))?;

    // The temporary file is removed when `persist` fails and the error drops
    temp.persist(target)
        .map_err(|e| ModuleError::io("rename", target, e.error))?;
    Ok(())
}

/// Give the replacement the permissions of the file it replaces. New files
/// get `0644` rather than the private mode temporary files are created with.
fn keep_permissions(temp: &std::fs::File, target: &Path) -> std::io::Result<()> {
    match std::fs::metadata(target) {
        Ok(existing) => temp.set_permissions(existing.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => default_permissions(temp),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn default_permissions(temp: &std::fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    temp.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_temp: &std::fs::File) -> std::io::Result<()> {
    Ok(())
}
