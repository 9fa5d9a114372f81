//! Integration test utilities for the emoji server
//!
//! Spawns the real application against PostgreSQL and Redis, with a local
//! stand-in for the upstream meaning provider.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
