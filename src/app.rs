//! Application context — unified state passed to every command handler.
//!
//! Constructed once in `Cli::run()` from the top-level flags and the
//! environment, then borrowed by each handler. The factory and control-plane
//! client are built on demand so they can borrow the shared command runner.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::factory::{DaemonFactory, Dirs};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::control_plane::WorkerInspect;
use crate::output::OutputContext;

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Shared process runner for service control, elevation and inspection.
    pub runner: TokioCommandRunner,
    storage_dir: PathBuf,
    runtime_root: PathBuf,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be resolved (home
    /// directory not found and `CORRAL_STORAGE_DIR` unset).
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let dirs = Dirs::from_env()?;
        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            runner: TokioCommandRunner::default(),
            storage_dir: dirs.storage_dir,
            runtime_root: dirs.runtime_root,
        })
    }

    /// Root of the installed worker runtime.
    #[must_use]
    pub fn runtime_root(&self) -> &Path {
        &self.runtime_root
    }

    /// A daemon factory over the resolved storage root.
    #[must_use]
    pub fn factory(&self) -> DaemonFactory<'_, TokioCommandRunner> {
        DaemonFactory::new(
            Dirs {
                storage_dir: self.storage_dir.clone(),
                runtime_root: self.runtime_root.clone(),
            },
            &self.runner,
        )
    }

    /// A control-plane client backed by the runtime's inspect binary.
    #[must_use]
    pub fn control(&self) -> WorkerInspect<'_, TokioCommandRunner> {
        WorkerInspect::new(&self.runner, &self.runtime_root)
    }
}
