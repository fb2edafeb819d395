// mdconvert - batch Markdown to HTML conversion driver
//
// This is the library crate containing the conversion pipeline and the
// batch orchestration logic. The binary crate (main.rs) provides the CLI
// entry point.

pub mod batch;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use batch::BatchRunner;
pub use models::{BatchSummary, ConfigError, RunPlan, Settings};
pub use services::{MarkdownRenderer, Renderer};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
