//! HTML5 document assembly and persistence.

use camino::{Utf8Path, Utf8PathBuf};
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{BufWriter, Write};
use thiserror::Error;

/// Errors from persisting a converted document.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Unsupported encoding \"{0}\"")]
    UnknownEncoding(String),

    #[error("Failed to write \"{path}\"")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Wrap an HTML fragment in the fixed document skeleton and persist it
/// with the named output encoding.
///
/// The skeleton is doctype, `html`/`head`/`body`, and a single
/// `meta charset` naming the output encoding; the fragment goes into the
/// body verbatim. Characters the output charset cannot represent are
/// written as numeric character references, which any HTML consumer
/// decodes back losslessly.
///
/// The stream is flushed and the flush result checked before reporting
/// success; the file handle is released on every exit path.
pub fn write_document(
    dest: &Utf8Path,
    fragment: &str,
    encoding_label: &str,
) -> Result<(), WriteError> {
    let encoding = Encoding::for_label(encoding_label.as_bytes())
        .ok_or_else(|| WriteError::UnknownEncoding(encoding_label.to_string()))?;

    let document = assemble_document(fragment, encoding);
    let (bytes, _, _) = encoding.encode(&document);

    let io_err = |source| WriteError::Io {
        path: dest.to_path_buf(),
        source,
    };

    let file = File::create(dest).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    out.write_all(&bytes).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    tracing::debug!("wrote {} ({} bytes)", dest, bytes.len());
    Ok(())
}

fn assemble_document(fragment: &str, encoding: &'static Encoding) -> String {
    let mut document = String::with_capacity(fragment.len() + 128);
    document.push_str("<!DOCTYPE html>\n");
    document.push_str("<html>\n");
    document.push_str("<head>\n");
    document.push_str(&format!("<meta charset=\"{}\" />\n", encoding.name()));
    document.push_str("</head>\n");
    document.push_str("<body>\n");
    document.push_str(fragment);
    if !fragment.ends_with('\n') {
        document.push('\n');
    }
    document.push_str("</body>\n");
    document.push_str("</html>\n");
    document
}
