//! Destination path mapping.
//!
//! Inputs must be relative so the destination tree mirrors the input tree;
//! a case-insensitive `.md` extension is replaced with `.html`, anything
//! else gets `.html` appended.

use super::ConversionError;
use camino::{Utf8Path, Utf8PathBuf};

const MARKUP_EXTENSION: &str = ".md";
const HTML_EXTENSION: &str = ".html";

/// Compute the destination-relative path for an input file.
///
/// Pure function, no I/O. Only markup-extension paths are rewritten:
/// `a.md` → `a.html`, `A.MD` → `A.html`, `a.txt` → `a.txt.html`, and
/// `a.html` → `a.html.html` (never double-mapped to plain `a.html`).
///
/// # Errors
///
/// Absolute inputs are rejected; mirroring is only well-defined for
/// directory-relative paths.
pub fn map_destination(input: &Utf8Path) -> Result<Utf8PathBuf, ConversionError> {
    if input.is_absolute() {
        return Err(ConversionError::AbsolutePathNotAllowed(input.to_path_buf()));
    }

    let path = input.as_str();
    let bytes = path.as_bytes();
    let stem = if bytes.len() >= MARKUP_EXTENSION.len()
        && bytes[bytes.len() - MARKUP_EXTENSION.len()..]
            .eq_ignore_ascii_case(MARKUP_EXTENSION.as_bytes())
    {
        &path[..path.len() - MARKUP_EXTENSION.len()]
    } else {
        path
    };

    Ok(Utf8PathBuf::from(format!("{stem}{HTML_EXTENSION}")))
}
