//! Plugin module resolution.
//!
//! Turns an installed package name into the list of importable module paths
//! the worker runtime should load, by introspecting the package's installed
//! files with `<runtime-root>/bin/pip show -f <plugin>`.
//!
//! Output order follows the introspection tool's file listing and is not
//! guaranteed stable across tool versions; callers must not rely on a
//! deterministic order for identical inputs across environments.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::CommandRunner;
use crate::infra::command_runner::require_success;

/// Source file suffix the worker runtime imports.
const SOURCE_SUFFIX: &str = ".py";
/// Package-initializer marker; initializer files are never listed.
const INIT_MARKER: &str = "__init__";

/// Resolves plugin packages installed under a runtime root.
pub struct PluginResolver<'a, R: CommandRunner> {
    runner: &'a R,
    pip_bin: PathBuf,
}

impl<'a, R: CommandRunner> PluginResolver<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R, runtime_root: &Path) -> Self {
        Self {
            runner,
            pip_bin: runtime_root.join("bin").join("pip"),
        }
    }

    /// List the importable module paths of `plugin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the introspection command fails (e.g. the plugin
    /// is not installed).
    pub async fn module_paths(&self, plugin: &str) -> Result<Vec<String>> {
        let bin = self.pip_bin.display().to_string();
        let output = self.runner.run(&bin, &["show", "-f", plugin]).await?;
        let output = require_success(output, &format!("listing files of plugin {plugin}"))?;
        let listing = String::from_utf8_lossy(&output.stdout);
        Ok(modules_from_listing(&listing))
    }
}

/// Convert a file listing into dotted module paths.
///
/// Keeps source files only, drops package initializers, strips path
/// traversal prefixes (file paths are relative to the package root), and
/// replaces path separators with dots.
fn modules_from_listing(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| line.ends_with(SOURCE_SUFFIX) && !line.contains(INIT_MARKER))
        .map(|line| {
            line.replace("../", "")
                .trim_end_matches(SOURCE_SUFFIX)
                .replace('/', ".")
        })
        .collect()
}
