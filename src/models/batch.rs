use camino::Utf8PathBuf;
use thiserror::Error;

/// Exit code reported when at least one file failed to convert.
pub const PER_FILE_FAILURE_CODE: u8 = 5;

/// Validated, immutable description of one conversion batch.
///
/// Built once by [`crate::config::resolve`]; the orchestrator only reads
/// it. Encodings are stored as charset labels and resolved inside the
/// render/write services, so an unrecognized label surfaces as a per-file
/// failure rather than a setup error.
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// Existing directory that destination paths are mirrored under.
    pub destination_dir: Utf8PathBuf,

    /// Charset label for decoding source files.
    pub input_encoding: String,

    /// Charset label for encoding output documents.
    pub output_encoding: String,

    /// Files to convert, in the order they were given.
    pub input_files: Vec<Utf8PathBuf>,

    /// Permit replacing existing destination files.
    pub overwrite: bool,

    /// Continue past a per-file failure instead of halting.
    pub resume: bool,

    /// Report failures with full diagnostic detail.
    pub debug: bool,
}

/// Setup failure detected while resolving the run configuration.
///
/// Each variant carries a distinct process exit code; no files are touched
/// once any of these is raised.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Destination directory is a required argument.")]
    MissingDestination,

    #[error("There is no directory at \"{0}\"")]
    InvalidDestination(Utf8PathBuf),

    #[error("Please specify at least one file to convert.")]
    MissingInputs,

    #[error("There is no file at \"{0}\"")]
    InvalidInput(Utf8PathBuf),
}

impl ConfigError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::MissingDestination => 1,
            ConfigError::InvalidDestination(_) => 2,
            ConfigError::MissingInputs => 3,
            ConfigError::InvalidInput(_) => 4,
        }
    }
}

/// Final state of a single file in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertStatus {
    Converted,
    Failed,
}

/// Per-file result recorded by the orchestrator.
///
/// Files never attempted under the halt policy get no outcome at all.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub file: Utf8PathBuf,
    pub status: ConvertStatus,
    pub message: String,
}

/// Aggregate result of a batch run.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Per-file outcomes in input order, one per attempted file.
    pub outcomes: Vec<ConversionOutcome>,

    /// Total number of files in the plan, attempted or not.
    pub total: usize,

    /// Process exit code: 0, or [`PER_FILE_FAILURE_CODE`] once any file
    /// failed. Monotonic - a later success never clears it.
    pub status: u8,
}

impl BatchSummary {
    pub fn converted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == ConvertStatus::Converted)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == ConvertStatus::Failed)
            .count()
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }
}
