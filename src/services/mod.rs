//! Services module - the per-file conversion pipeline.
//!
//! Everything a single file goes through lives here, framework-agnostic and
//! free of batch-level policy:
//!
//! - [`mapping`]: destination path computation (relative inputs only,
//!   `.md` → `.html` extension rule)
//! - [`overwrite`]: overwrite policy check and destination tree creation
//! - [`render`]: the [`Renderer`] seam plus the default
//!   pulldown-cmark-backed [`MarkdownRenderer`]
//! - [`writer`]: HTML5 document skeleton and encoded persistence
//!
//! The orchestrator ([`crate::batch`]) sequences these four steps per file
//! and owns the halt/continue decision; the services only report what went
//! wrong through [`ConversionError`].

use camino::Utf8PathBuf;
use thiserror::Error;

pub mod mapping;
pub mod overwrite;
pub mod render;
pub mod writer;

pub use mapping::map_destination;
pub use overwrite::ensure_writable;
pub use render::{MarkdownRenderer, RenderError, Renderer};
pub use writer::{write_document, WriteError};

/// Any failure in the per-file conversion pipeline.
///
/// The `Display` form is the short user-facing message; the full chain is
/// shown only in debug mode.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Paths to converted files must be relative, got \"{0}\"")]
    AbsolutePathNotAllowed(Utf8PathBuf),

    #[error("Destination file \"{0}\" already exists")]
    DestinationExists(Utf8PathBuf),

    #[error("Failed to create directory \"{0}\"")]
    CreateDirectories(Utf8PathBuf, #[source] std::io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Write(#[from] WriteError),
}
