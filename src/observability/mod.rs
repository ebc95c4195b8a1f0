//! Tracing for the plugin and worker threads, exported to a local OTLP file.
//!
//! Zellij plugins have no network access worth relying on, so spans are
//! serialized as OTLP JSON and appended to a rotating file in the plugin data
//! directory:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → jobfinder-otlp.json
//! ```
//!
//! The file rotates at 10MB and keeps three backups.
//!
//! # Trace level
//!
//! 1. `RUST_LOG`, when the environment provides it
//! 2. the `trace_level` plugin option
//! 3. `"info"`
//!
//! # Usage
//!
//! ```no_run
//! use jobfinder::observability::init_tracing;
//! use jobfinder::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, resolve_level};

/// Service and instrumentation scope name attached to every exported span.
pub const SERVICE_NAME: &str = "JobFinder";

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "jobfinder-otlp.json";
