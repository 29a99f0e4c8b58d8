//! Test Utilities Crate
//!
//! Shared test infrastructure for the resubmission pipeline test suite:
//!
//! - `builders`: raw-record builders for the built-in sources
//! - `fixtures`: pre-built batches and configurations
//! - `generators`: property-based record strategies
//! - `assertions`: assertion helpers for run outcomes

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
