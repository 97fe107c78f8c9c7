//! Process-management drivers.
//!
//! One driver per host service-manager convention, selected by the daemon's
//! `process_management` discriminator through an explicit dispatch table —
//! no runtime reflection.

pub mod initd;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ControlPlane};
use crate::domain::{Daemon, DaemonError};

/// Module every includes file starts with; boots the agent side of the
/// worker runtime before any plugin module loads.
pub const BOOTSTRAP_MODULE: &str = "corral_agent.startup";

/// Plugins every daemon loads, resolved at create time.
pub const BUILTIN_PLUGINS: &[&str] = &["corral-operations"];

/// Crash dump the worker runtime writes into its workdir on an uncaught
/// top-level exception. Inspected on start/stop timeout.
pub const WORKER_ERROR_FILE: &str = "worker_error.out";

/// Default bound for waiting on daemon start.
pub const DEFAULT_START_TIMEOUT: Duration = Duration::from_secs(15);
/// Default bound for waiting on daemon stop.
pub const DEFAULT_STOP_TIMEOUT: Duration = Duration::from_secs(15);
/// Default sleep between liveness probes.
pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_secs(1);

/// Registered process-management discriminators.
pub const REGISTERED: &[&str] = &[initd::PROCESS_MANAGEMENT];

/// Whether a driver is registered for `process_management`.
#[must_use]
pub fn is_registered(process_management: &str) -> bool {
    REGISTERED.contains(&process_management)
}

/// Tagged driver dispatch — the factory map from discriminator to concrete
/// driver. Adding a convention means adding a variant here and an arm to
/// every match below.
#[derive(Debug)]
pub enum DaemonDriver<'a, R: CommandRunner, C: ControlPlane> {
    Initd(initd::InitdDriver<'a, R, C>),
}

impl<'a, R: CommandRunner, C: ControlPlane> DaemonDriver<'a, R, C> {
    /// Construct the driver registered for the daemon's discriminator.
    ///
    /// # Errors
    ///
    /// `DaemonError::UnregisteredDriver` when no driver matches.
    pub fn dispatch(
        daemon: Daemon,
        runtime_root: &Path,
        runner: &'a R,
        control: &'a C,
    ) -> Result<Self, DaemonError> {
        match daemon.process_management.as_str() {
            initd::PROCESS_MANAGEMENT => Ok(Self::Initd(initd::InitdDriver::new(
                daemon,
                initd::Layout::default(),
                runtime_root,
                runner,
                control,
            ))),
            other => Err(DaemonError::UnregisteredDriver(other.to_string())),
        }
    }

    /// The daemon record owned by this driver.
    #[must_use]
    pub fn daemon(&self) -> &Daemon {
        match self {
            Self::Initd(driver) => driver.daemon(),
        }
    }

    /// Create the daemon's on-disk artifacts.
    ///
    /// # Errors
    ///
    /// See [`initd::InitdDriver::create`].
    pub async fn create(&self) -> Result<()> {
        match self {
            Self::Initd(driver) => driver.create().await,
        }
    }

    /// Start the daemon and wait for it to report alive.
    ///
    /// # Errors
    ///
    /// See [`initd::InitdDriver::start`].
    pub async fn start(&self, interval: Duration, timeout: Duration) -> Result<()> {
        match self {
            Self::Initd(driver) => driver.start(interval, timeout).await,
        }
    }

    /// Stop the daemon and wait for it to report dead.
    ///
    /// # Errors
    ///
    /// See [`initd::InitdDriver::stop`].
    pub async fn stop(&self, interval: Duration, timeout: Duration) -> Result<()> {
        match self {
            Self::Initd(driver) => driver.stop(interval, timeout).await,
        }
    }

    /// Stop then start, sequentially.
    ///
    /// # Errors
    ///
    /// See [`initd::InitdDriver::restart`].
    pub async fn restart(&self, interval: Duration, timeout: Duration) -> Result<()> {
        match self {
            Self::Initd(driver) => driver.restart(interval, timeout).await,
        }
    }

    /// Register an additional plugin's modules with the daemon.
    ///
    /// # Errors
    ///
    /// See [`initd::InitdDriver::register`].
    pub async fn register(&self, plugin: &str) -> Result<()> {
        match self {
            Self::Initd(driver) => driver.register(plugin).await,
        }
    }

    /// Delete the daemon's artifacts. Fails while the worker is alive.
    ///
    /// # Errors
    ///
    /// See [`initd::InitdDriver::delete`].
    pub async fn delete(&self) -> Result<()> {
        match self {
            Self::Initd(driver) => driver.delete().await,
        }
    }
}
