//! Application layer — port trait definitions and the liveness prober.
//!
//! This module depends only on `crate::domain` — never on `crate::infra`
//! or `crate::commands`.

pub mod ports;
pub mod probe;

pub use ports::{CommandRunner, ControlPlane};
pub use probe::{ProbeError, probe};
