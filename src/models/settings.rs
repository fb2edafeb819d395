use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Tool settings from `mdconvert.yaml`.
///
/// Every field has a default, so a missing or partial settings file is
/// always usable. The same options can be supplied through `MDCONVERT_*`
/// environment variables or CLI flags; later layers win (defaults <
/// settings file < environment < CLI).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Charset label for reading sources and writing output documents.
    /// `None` means the default encoding (UTF-8).
    #[serde(default)]
    pub encoding: Option<String>,

    /// Permit replacing existing destination files.
    #[serde(default)]
    pub overwrite: bool,

    /// Continue past a per-file failure instead of halting the run.
    #[serde(default)]
    pub resume: bool,

    /// Report failures with full diagnostic detail instead of a short message.
    #[serde(default)]
    pub debug: bool,

    /// Directory for rotating log files. `None` disables file logging.
    #[serde(default)]
    pub log_dir: Option<Utf8PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            encoding: None,
            overwrite: false,
            resume: false,
            debug: false,
            log_dir: None,
        }
    }
}

/// Environment variable names recognized by [`Settings::apply_env`].
pub const ENCODING_VAR: &str = "MDCONVERT_ENCODING";
pub const OVERWRITE_VAR: &str = "MDCONVERT_OVERWRITE";
pub const RESUME_VAR: &str = "MDCONVERT_RESUME";
pub const DEBUG_VAR: &str = "MDCONVERT_DEBUG";

impl Settings {
    /// Overlay settings from environment variables.
    ///
    /// `lookup` abstracts `std::env::var` so layering stays testable
    /// without mutating process-global state.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(label) = lookup(ENCODING_VAR) {
            if !label.is_empty() {
                self.encoding = Some(label);
            }
        }
        if let Some(v) = lookup(OVERWRITE_VAR) {
            self.overwrite = parse_bool(&v);
        }
        if let Some(v) = lookup(RESUME_VAR) {
            self.resume = parse_bool(&v);
        }
        if let Some(v) = lookup(DEBUG_VAR) {
            self.debug = parse_bool(&v);
        }
    }

    /// Overlay settings from process environment variables.
    pub fn apply_process_env(&mut self) {
        self.apply_env(|name| std::env::var(name).ok());
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}
