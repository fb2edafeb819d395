//! Overwrite policy enforcement.

use super::ConversionError;
use camino::Utf8Path;
use std::fs;

/// Check that a destination file may be written, creating its parent
/// directory tree when it is.
///
/// An existing destination is only replaced when the overwrite policy
/// allows it. Directory creation is recursive and idempotent, so mirrored
/// subtrees shared between inputs are safe.
pub fn ensure_writable(dest: &Utf8Path, overwrite: bool) -> Result<(), ConversionError> {
    if dest.exists() && !overwrite {
        return Err(ConversionError::DestinationExists(dest.to_path_buf()));
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| ConversionError::CreateDirectories(parent.to_path_buf(), source))?;
    }

    Ok(())
}
