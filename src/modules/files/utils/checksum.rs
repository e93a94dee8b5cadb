//! SHA-256 digests used to decide whether file content has to change

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::modules::error::ModuleError;

/// Hex-encoded SHA-256 of `data`
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Hex-encoded SHA-256 of the file at `path`, or `None` if it does not exist
pub fn file_sha256(path: &Path) -> Result<Option<String>, ModuleError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ModuleError::io("open", path, e)),
    };

    let mut hasher = Sha256::new();
    let mut buffer = vec![0; 8192];
    loop {
        let bytes_read = file
            .read(&mut buffer)
            .map_err(|e| ModuleError::io("read", path, e))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(Some(format!("{:x}", hasher.finalize())))
}
