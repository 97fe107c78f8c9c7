//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `tokio`, `std::fs`, or `std::process`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by daemon construction, persistence, and lifecycle
/// operations. Each variant maps to a stable process exit code so that
/// orchestration scripts can branch on the failure kind.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// A mandatory construction parameter was absent or empty.
    #[error("{0} is mandatory")]
    MissingMandatoryParam(&'static str),

    /// A construction parameter was present but invalid (non-numeric worker
    /// bound, or `min_workers > max_workers`).
    #[error("{0}")]
    Parameters(String),

    /// An artifact path already exists on `create()`.
    #[error("cannot create daemon {name}: {path} already exists")]
    ArtifactExists { name: String, path: PathBuf },

    /// The worker did not report alive within the start bound.
    #[error("failed starting daemon {name}: waited for {timeout} seconds")]
    StartupTimeout { name: String, timeout: u64 },

    /// The worker did not report dead within the stop bound.
    #[error("failed stopping daemon {name}: waited for {timeout} seconds")]
    ShutdownTimeout { name: String, timeout: u64 },

    /// The worker runtime wrote a crash dump during start/stop. Carries the
    /// dump contents verbatim (type, value, traceback text).
    #[error("worker runtime error:\n{0}")]
    WorkerError(String),

    /// `delete()` was called while the worker still reports alive.
    #[error("cannot delete daemon {0}: process still running")]
    StillRunning(String),

    /// No persisted record exists for the given name.
    #[error("daemon {0} not found")]
    NotFound(String),

    /// The process-management discriminator has no registered driver.
    #[error("no implementation found for process management: {0}")]
    UnregisteredDriver(String),
}

impl DaemonError {
    /// Static exit-code table keyed by error kind.
    ///
    /// Lifecycle failures start from 101, configuration failures from 202.
    /// Anything that is not a `DaemonError` exits 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::WorkerError(_) => 101,
            Self::ShutdownTimeout { .. } => 102,
            Self::StartupTimeout { .. } => 103,
            Self::StillRunning(_) => 104,
            Self::NotFound(_) => 105,
            Self::Parameters(_) => 202,
            Self::ArtifactExists { .. } => 203,
            Self::MissingMandatoryParam(_) => 204,
            Self::UnregisteredDriver(_) => 205,
        }
    }
}

/// Extract the exit code for an error chain: the `DaemonError` code when the
/// chain contains one, 1 otherwise.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DaemonError>()
        .map_or(1, DaemonError::exit_code)
}
