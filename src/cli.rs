use camino::Utf8PathBuf;
use clap::Parser;

use crate::models::Settings;

/// Batch Markdown to HTML converter.
///
/// Positional arguments are optional at the clap layer on purpose: the
/// configuration resolver owns the exit-code contract for missing or
/// invalid arguments, so clap must not reject the command line first.
#[derive(Parser, Debug)]
#[command(author, version, about = "Convert Markdown files to HTML under a destination directory", long_about = None)]
pub struct Cli {
    /// Directory converted files are written under
    pub destination: Option<Utf8PathBuf>,

    /// Markdown files to convert; paths must be relative and are mirrored
    /// below the destination directory
    pub inputs: Vec<Utf8PathBuf>,

    /// Charset label for reading sources and writing output (default: UTF-8)
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Replace existing destination files
    #[arg(long)]
    pub overwrite: bool,

    /// Continue past a per-file failure instead of halting
    #[arg(long)]
    pub resume: bool,

    /// Report failures with full diagnostic detail
    #[arg(long)]
    pub debug: bool,

    /// Settings file to load (default: mdconvert.yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,
}

impl Cli {
    /// Overlay command-line flags onto layered settings. Flags only
    /// enable; absence leaves the lower layers in effect.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(label) = &self.encoding {
            settings.encoding = Some(label.clone());
        }
        if self.overwrite {
            settings.overwrite = true;
        }
        if self.resume {
            settings.resume = true;
        }
        if self.debug {
            settings.debug = true;
        }
    }
}
