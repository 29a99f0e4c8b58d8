//! Export Interface Crate
//!
//! Everything with a filesystem in it lives here: reading raw record files,
//! writing run artifacts, and runner configuration. The decision core in
//! `domain_resubmission` stays free of I/O.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod reader;

pub use artifacts::{ArtifactPaths, ArtifactWriter};
pub use config::RunnerConfig;
pub use error::{ExportError, RunnerConfigError};
pub use reader::read_records;
