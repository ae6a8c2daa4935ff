//! Shared utilities for clinicms.
//!
//! This crate provides common utilities used across the clinicms workspace:
//! - ULID-based identifier generation
//! - Logging setup with tracing
//! - Data directory resolution

pub mod id;
pub mod log;
pub mod path;

pub use id::Identifier;
