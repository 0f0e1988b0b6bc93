//! Core Kernel - Foundational types for the training records system
//!
//! This crate provides the building blocks shared by the eligibility engine
//! and the API layer:
//! - Strongly-typed identifiers for students, organizations and records
//! - Reference instants resolved to calendar dates in a jurisdiction timezone
//! - Whole-day calendar arithmetic and ISO-8601 date parsing

pub mod temporal;
pub mod identifiers;

pub use temporal::{AsOf, DateWindow, Timezone, TemporalError, days_between, parse_iso_date};
pub use identifiers::{
    StudentId, OrganizationId, InsuranceId, CertificationId,
    CourseId, CompetencyId,
};
