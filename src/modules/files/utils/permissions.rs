//! File permission helpers

use std::path::Path;

use crate::modules::error::{ModuleError, ValidationError};

/// Parse an octal mode such as `0644` or `755`
pub fn parse_mode(mode: &str) -> Result<u32, ValidationError> {
    let digits = mode.trim();
    if digits.is_empty() || !digits.chars().all(|c| ('0'..='7').contains(&c)) {
        return Err(ValidationError::invalid("mode", mode, "expected an octal mode"));
    }

    match u32::from_str_radix(digits, 8) {
        Ok(parsed) if parsed <= 0o7777 => Ok(parsed),
        _ => Err(ValidationError::invalid("mode", mode, "mode out of range")),
    }
}

/// Apply `mode` to `path`; returns `true` if the permissions changed
#[cfg(unix)]
pub fn apply_mode(path: &Path, mode: u32) -> Result<bool, ModuleError> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path).map_err(|e| ModuleError::io("stat", path, e))?;
    let mut permissions = metadata.permissions();
    if permissions.mode() & 0o7777 == mode {
        return Ok(false);
    }

    permissions.set_mode(mode);
    std::fs::set_permissions(path, permissions).map_err(|e| ModuleError::io("chmod", path, e))?;
    Ok(true)
}

/// Apply `mode` to `path`; returns `true` if the permissions changed.
///
/// Only the owner write bit is honoured, as the read-only flag.
#[cfg(not(unix))]
pub fn apply_mode(path: &Path, mode: u32) -> Result<bool, ModuleError> {
    let metadata = std::fs::metadata(path).map_err(|e| ModuleError::io("stat", path, e))?;
    let mut permissions = metadata.permissions();
    let readonly = mode & 0o200 == 0;
    if permissions.readonly() == readonly {
        return Ok(false);
    }

    permissions.set_readonly(readonly);
    std::fs::set_permissions(path, permissions).map_err(|e| ModuleError::io("chmod", path, e))?;
    Ok(true)
}
