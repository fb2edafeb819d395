use crate::models::{ConfigError, RunPlan, Settings};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Default settings file name, looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "mdconvert.yaml";

/// Charset label used when no encoding option is configured.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Load tool settings from a YAML file.
///
/// A missing file is not an error: the tool is fully usable without one,
/// so defaults are returned with a breadcrumb in the log. A file that
/// exists but cannot be read or parsed is reported - a half-applied
/// settings file must not silently fall back.
pub fn load_settings(path: Option<&Utf8Path>) -> Result<Settings> {
    let path = path.unwrap_or_else(|| Utf8Path::new(DEFAULT_SETTINGS_FILE));

    if !path.exists() {
        tracing::debug!("Settings file not found at {}, using defaults", path);
        return Ok(Settings::default());
    }

    let file_contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path))?;

    let settings: Settings = serde_yaml_ng::from_str(&file_contents)
        .with_context(|| format!("Failed to parse settings file: {}", path))?;

    tracing::info!("Loaded settings from {}", path);
    Ok(settings)
}

/// Validate arguments and settings into an immutable [`RunPlan`].
///
/// Setup failures are fatal and carry distinct exit codes; no file is
/// touched once any of them is raised. Input existence is checked here so
/// the batch never starts against a list that was wrong from the outset;
/// note that absolute inputs pass this check and are rejected later by the
/// path mapper as a per-file failure.
pub fn resolve(
    destination: Option<Utf8PathBuf>,
    inputs: Vec<Utf8PathBuf>,
    settings: &Settings,
) -> Result<RunPlan, ConfigError> {
    let Some(destination_dir) = destination else {
        return Err(ConfigError::MissingDestination);
    };

    if !destination_dir.is_dir() {
        return Err(ConfigError::InvalidDestination(destination_dir));
    }

    if inputs.is_empty() {
        return Err(ConfigError::MissingInputs);
    }

    for file in &inputs {
        if !file.exists() || file.is_dir() {
            return Err(ConfigError::InvalidInput(file.clone()));
        }
    }

    let encoding = settings
        .encoding
        .clone()
        .unwrap_or_else(|| DEFAULT_ENCODING.to_string());

    tracing::debug!(
        "resolved run plan: {} files -> {}, encoding {}",
        inputs.len(),
        destination_dir,
        encoding
    );

    Ok(RunPlan {
        destination_dir,
        input_encoding: encoding.clone(),
        output_encoding: encoding,
        input_files: inputs,
        overwrite: settings.overwrite,
        resume: settings.resume,
        debug: settings.debug,
    })
}
