//! Privileged filesystem helpers.
//!
//! Daemon artifacts live under root-owned directories, so every mutation
//! follows the same pattern: try the plain filesystem call first, fall back
//! to an elevated shell command only on `PermissionDenied`. Tests point the
//! artifact directories at tempdirs and never hit the elevated path.

use std::io::ErrorKind;
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;
use crate::infra::command_runner::require_success;

/// Filesystem operations that may cross a privilege boundary.
pub struct PrivilegedFs<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> PrivilegedFs<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// Install `content` at `target` via temp-file-then-move.
    ///
    /// The content is written to a temp file first so the move into the
    /// protected target approximates atomic replacement across the
    /// privilege boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the temp file cannot be written or the install
    /// into `target` fails.
    pub async fn install(&self, content: &str, target: &Path) -> Result<()> {
        if let Some(parent) = target.parent() {
            self.ensure_dir(parent).await?;
        }
        let mut temp = tempfile::NamedTempFile::new().context("creating temp file")?;
        temp.write_all(content.as_bytes())
            .context("writing temp file")?;
        temp.flush().context("flushing temp file")?;

        let temp_path = temp.path().to_path_buf();
        match std::fs::copy(&temp_path, target) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                let output = self
                    .runner
                    .sudo(&["cp", &temp_path.display().to_string(), &target.display().to_string()])
                    .await?;
                require_success(output, &format!("installing {}", target.display()))?;
                Ok(())
            }
            Err(e) => {
                Err(anyhow::Error::from(e).context(format!("installing {}", target.display())))
            }
        }
    }

    /// Create `path` and its parents if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn ensure_dir(&self, path: &Path) -> Result<()> {
        match std::fs::create_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                let output = self
                    .runner
                    .sudo(&["mkdir", "-p", &path.display().to_string()])
                    .await?;
                require_success(output, &format!("creating directory {}", path.display()))?;
                Ok(())
            }
            Err(e) => Err(
                anyhow::Error::from(e).context(format!("creating directory {}", path.display()))
            ),
        }
    }

    /// Read `path` to a string, elevating when the file is protected.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read either way.
    pub async fn read_to_string(&self, path: &Path) -> Result<String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                let output = self.runner.sudo(&["cat", &path.display().to_string()]).await?;
                let output = require_success(output, &format!("reading {}", path.display()))?;
                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Err(e) => Err(anyhow::Error::from(e).context(format!("reading {}", path.display()))),
        }
    }

    /// Remove `path` if it exists. A pre-existing absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub async fn remove(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                let output = self.runner.sudo(&["rm", &path.display().to_string()]).await?;
                require_success(output, &format!("removing {}", path.display()))?;
                Ok(())
            }
            Err(e) => Err(anyhow::Error::from(e).context(format!("removing {}", path.display()))),
        }
    }

    /// Mark `path` executable (0755).
    ///
    /// # Errors
    ///
    /// Returns an error if permissions cannot be changed.
    pub async fn make_executable(&self, path: &Path) -> Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            match std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)) {
                Ok(()) => return Ok(()),
                Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                    let output = self
                        .runner
                        .sudo(&["chmod", "+x", &path.display().to_string()])
                        .await?;
                    require_success(output, &format!("chmod +x {}", path.display()))?;
                    return Ok(());
                }
                Err(e) => {
                    return Err(
                        anyhow::Error::from(e).context(format!("chmod +x {}", path.display()))
                    );
                }
            }
        }
        #[cfg(not(unix))]
        {
            let _ = path;
            Ok(())
        }
    }
}
