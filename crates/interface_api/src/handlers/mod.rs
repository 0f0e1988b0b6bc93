//! Request handlers
//!
//! Each handler validates the request, resolves defaults from
//! [`crate::config::ApiConfig`] and calls the engine synchronously.

pub mod health;
pub mod insurance;
pub mod certifications;
pub mod renewals;
pub mod dashboard;
pub mod reports;
