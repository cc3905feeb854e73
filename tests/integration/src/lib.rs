//! Integration test utilities for the VaxTrack API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API and its live notification stream.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
