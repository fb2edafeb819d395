//! The rendering seam and its default Markdown implementation.
//!
//! The orchestrator only knows the [`Renderer`] trait: source path in,
//! HTML fragment out. [`MarkdownRenderer`] is the production
//! implementation; tests substitute their own to exercise batch policy
//! without touching real markup.

use camino::{Utf8Path, Utf8PathBuf};
use encoding_rs::Encoding;
use std::fs;
use thiserror::Error;

/// Errors from reading and rendering a source file.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unsupported encoding \"{0}\"")]
    UnknownEncoding(String),

    #[error("Failed to read \"{path}\"")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source \"{0}\" is not valid {1} text")]
    Malformed(Utf8PathBuf, &'static str),
}

/// Converts one source document into an HTML fragment.
pub trait Renderer {
    /// Read `source`, decode it with the charset named by
    /// `encoding_label`, and render the markup to an HTML fragment.
    fn render(&self, source: &Utf8Path, encoding_label: &str) -> Result<String, RenderError>;
}

/// CommonMark renderer backed by pulldown-cmark.
#[derive(Debug, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, source: &Utf8Path, encoding_label: &str) -> Result<String, RenderError> {
        let encoding = Encoding::for_label(encoding_label.as_bytes())
            .ok_or_else(|| RenderError::UnknownEncoding(encoding_label.to_string()))?;

        let bytes = fs::read(source).map_err(|source_err| RenderError::Read {
            path: source.to_path_buf(),
            source: source_err,
        })?;

        // BOM-aware decode; `actual` may differ from the configured
        // encoding when the source carries a BOM.
        let (text, actual, had_errors) = encoding.decode(&bytes);
        if had_errors {
            return Err(RenderError::Malformed(source.to_path_buf(), actual.name()));
        }

        let parser = pulldown_cmark::Parser::new(&text);
        let mut fragment = String::with_capacity(text.len() * 2);
        pulldown_cmark::html::push_html(&mut fragment, parser);

        tracing::debug!("rendered {} ({} bytes in, {} out)", source, bytes.len(), fragment.len());
        Ok(fragment)
    }
}
