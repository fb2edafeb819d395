//! Data models for the conversion driver.
//!
//! - [`Settings`]: tool options loaded from `mdconvert.yaml` and layered
//!   with environment variables and CLI flags
//! - [`RunPlan`]: the validated, immutable description of one batch
//! - [`ConfigError`]: setup failures with their distinct exit codes (1-4)
//! - [`ConversionOutcome`] / [`BatchSummary`]: per-file and aggregate
//!   results produced by the orchestrator

pub mod batch;
pub mod settings;

pub use batch::{
    BatchSummary, ConfigError, ConversionOutcome, ConvertStatus, RunPlan,
    PER_FILE_FAILURE_CODE,
};
pub use settings::Settings;
