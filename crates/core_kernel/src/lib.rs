//! Core Kernel - Foundational types and utilities for the claims pipeline
//!
//! This crate provides the fundamental building blocks used across the
//! resubmission system:
//! - Text normalization helpers for loosely structured source fields
//! - Timestamp parsing with a UTC-only policy
//! - Normalized edit similarity for fuzzy reason matching
//! - Common identifiers

pub mod identifiers;
pub mod similarity;
pub mod temporal;
pub mod text;

pub use identifiers::RunId;
pub use similarity::normalized_similarity;
pub use temporal::{parse_timestamp, TemporalError};
pub use text::{normalize_field, title_case_reason};
