//! Request/Response data transfer objects
//!
//! Snapshots arrive with ISO date strings; conversion into domain records
//! happens here so malformed dates are reported with their full field path.

pub mod snapshot;
pub mod insurance;
pub mod certifications;
pub mod renewals;
pub mod reports;
