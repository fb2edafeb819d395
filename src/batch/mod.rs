//! Batch orchestration.
//!
//! Drives each input file through the conversion pipeline in input-list
//! order, strictly sequentially. Every file moves through
//! `Pending -> Converting -> Done | Failed`: entering `Converting` is
//! announced on stdout, a `Failed` transition is reported on stderr and
//! escalates the process status to the per-file failure code. When the
//! resume policy is off the run halts at the first failure and the
//! remaining files stay pending, unreported.
//!
//! Failures are plain values ([`ConversionOutcome`]), not unwinding - the
//! halt/continue decision is a function of policy and outcome only.

use crate::models::{
    BatchSummary, ConversionOutcome, ConvertStatus, RunPlan, PER_FILE_FAILURE_CODE,
};
use crate::services::{
    ensure_writable, map_destination, write_document, ConversionError, Renderer,
};
use camino::{Utf8Path, Utf8PathBuf};

/// Sequences per-file conversion over a validated [`RunPlan`].
pub struct BatchRunner<'a, R: Renderer> {
    plan: &'a RunPlan,
    renderer: R,
}

impl<'a, R: Renderer> BatchRunner<'a, R> {
    pub fn new(plan: &'a RunPlan, renderer: R) -> Self {
        Self { plan, renderer }
    }

    /// Run the batch to completion or to the first failure under the
    /// non-resume policy.
    pub fn run(&self) -> BatchSummary {
        let mut outcomes = Vec::with_capacity(self.plan.input_files.len());
        let mut status = 0u8;

        for file in &self.plan.input_files {
            println!("Converting file \"{file}\" ...");
            tracing::info!("converting {}", file);

            match self.convert_one(file) {
                Ok(dest) => {
                    tracing::info!("converted {} -> {}", file, dest);
                    outcomes.push(ConversionOutcome {
                        file: file.clone(),
                        status: ConvertStatus::Converted,
                        message: String::new(),
                    });
                }
                Err(err) => {
                    let message = err.to_string();
                    eprintln!("Error converting file \"{file}\":");
                    if self.plan.debug {
                        eprintln!("{:?}", anyhow::Error::new(err));
                    } else {
                        eprintln!("{message}");
                    }
                    tracing::warn!("failed to convert {}: {}", file, message);

                    status = PER_FILE_FAILURE_CODE;
                    outcomes.push(ConversionOutcome {
                        file: file.clone(),
                        status: ConvertStatus::Failed,
                        message,
                    });

                    if !self.plan.resume {
                        tracing::info!("halting: resume policy is off");
                        break;
                    }
                }
            }
        }

        BatchSummary {
            outcomes,
            total: self.plan.input_files.len(),
            status,
        }
    }

    /// One file through the pipeline: map, guard, render, write.
    fn convert_one(&self, file: &Utf8Path) -> Result<Utf8PathBuf, ConversionError> {
        let relative = map_destination(file)?;
        let dest = self.plan.destination_dir.join(relative);
        ensure_writable(&dest, self.plan.overwrite)?;
        let fragment = self.renderer.render(file, &self.plan.input_encoding)?;
        write_document(&dest, &fragment, &self.plan.output_encoding)?;
        Ok(dest)
    }
}
