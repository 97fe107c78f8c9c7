//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `tokio`, `std::fs`, or `std::process`. All functions are synchronous and
//! take data in, returning data out.

pub mod daemon;
pub mod error;

pub use daemon::{Daemon, DaemonParams};
pub use error::{DaemonError, exit_code_for};
