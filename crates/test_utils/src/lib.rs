//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! training records test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built reference dates, ids and rosters
//! - `builders`: Builder patterns for students, organizations and records
//! - `assertions`: Custom assertion helpers for classification results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
