//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`
//! or `crate::commands`.

use std::collections::BTreeSet;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;
use serde_json::{Map, Value};

/// Generic command execution with timeout and guaranteed process kill.
///
/// The production implementation uses tokio; test doubles return canned
/// results without spawning processes.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a command with the default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a command with a custom timeout (overrides default).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;

    /// Run a command elevated through `sudo` with the default timeout.
    ///
    /// Daemon artifacts live under privileged directories (`/etc/init.d`,
    /// `/etc/default`), so installs and removals go through this method.
    async fn sudo(&self, args: &[&str]) -> Result<Output>;
}

/// Out-of-band query channel into the running worker runtime.
///
/// Destinations take the form `"<namespace>.<queue>"`. The driver and the
/// liveness prober only consume this interface, so they can be tested
/// against a fake without a real worker runtime or message broker.
#[allow(async_fn_in_trait)]
pub trait ControlPlane {
    /// Returns `true` when a worker answers at `destination`.
    async fn ping(&self, destination: &str) -> Result<bool>;

    /// Runtime statistics of the worker at `destination`, `None` when no
    /// worker is registered there.
    async fn stats(&self, destination: &str) -> Result<Option<Map<String, Value>>>;

    /// Names of the tasks registered with the worker at `destination`.
    async fn registered_tasks(&self, destination: &str) -> Result<BTreeSet<String>>;
}
