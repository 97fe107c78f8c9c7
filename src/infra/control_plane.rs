//! Control-plane client backed by the worker runtime's inspect binary.
//!
//! The control channel itself (broker protocol, message format) is the
//! runtime's business; this client shells out to
//! `<runtime-root>/bin/worker inspect <query> --destination <dest> --json`
//! and parses the JSON document it prints, which is keyed by destination.
//!
//! A non-zero exit means no worker answered — that is "absent", not an
//! error, so liveness polling keeps going while the daemon is down.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::application::ports::{CommandRunner, ControlPlane};

/// Production `ControlPlane` implementation.
pub struct WorkerInspect<'a, R: CommandRunner> {
    runner: &'a R,
    inspect_bin: PathBuf,
}

impl<'a, R: CommandRunner> WorkerInspect<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R, runtime_root: &Path) -> Self {
        Self {
            runner,
            inspect_bin: runtime_root.join("bin").join("worker"),
        }
    }

    /// Run one inspect query and return the per-destination value, `None`
    /// when no worker answered at `destination`.
    async fn query(&self, what: &str, destination: &str) -> Result<Option<Value>> {
        let bin = self.inspect_bin.display().to_string();
        let output = self
            .runner
            .run(&bin, &["inspect", what, "--destination", destination, "--json"])
            .await?;
        if !output.status.success() {
            return Ok(None);
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            return Ok(None);
        }
        let doc: Value = serde_json::from_str(stdout.trim())
            .with_context(|| format!("parsing inspect {what} output"))?;
        Ok(doc.get(destination).filter(|v| !v.is_null()).cloned())
    }
}

impl<R: CommandRunner> ControlPlane for WorkerInspect<'_, R> {
    async fn ping(&self, destination: &str) -> Result<bool> {
        Ok(self.query("ping", destination).await?.is_some())
    }

    async fn stats(&self, destination: &str) -> Result<Option<Map<String, Value>>> {
        match self.query("stats", destination).await? {
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) | None => Ok(None),
        }
    }

    async fn registered_tasks(&self, destination: &str) -> Result<BTreeSet<String>> {
        let tasks = match self.query("registered", destination).await? {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|v| v.as_str().map(ToOwned::to_owned))
                .collect(),
            Some(_) | None => BTreeSet::new(),
        };
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::test_support::FakeRunner;

    fn client(runner: &FakeRunner) -> WorkerInspect<'_, FakeRunner> {
        WorkerInspect::new(runner, Path::new("/opt/corral"))
    }

    #[tokio::test]
    async fn test_stats_present_for_registered_destination() {
        let runner = FakeRunner::default()
            .canned("inspect stats", r#"{"worker.q1": {"pool": {"processes": [412]}}}"#);
        let stats = client(&runner)
            .stats("worker.q1")
            .await
            .expect("stats query");
        let stats = stats.expect("worker should be present");
        assert!(stats.contains_key("pool"));
    }

    #[tokio::test]
    async fn test_stats_absent_for_other_destination() {
        let runner = FakeRunner::default()
            .canned("inspect stats", r#"{"worker.other": {"pool": {}}}"#);
        let stats = client(&runner).stats("worker.q1").await.expect("stats query");
        assert!(stats.is_none());
    }

    #[tokio::test]
    async fn test_stats_absent_when_inspect_exits_nonzero() {
        let runner = FakeRunner::default().fail_on("inspect stats");
        let stats = client(&runner).stats("worker.q1").await.expect("stats query");
        assert!(stats.is_none(), "failed inspect means no worker, not an error");
    }

    #[tokio::test]
    async fn test_stats_absent_on_empty_output() {
        let runner = FakeRunner::default().canned("inspect stats", "");
        let stats = client(&runner).stats("worker.q1").await.expect("stats query");
        assert!(stats.is_none());
    }

    #[tokio::test]
    async fn test_stats_null_destination_value_is_absent() {
        let runner = FakeRunner::default().canned("inspect stats", r#"{"worker.q1": null}"#);
        let stats = client(&runner).stats("worker.q1").await.expect("stats query");
        assert!(stats.is_none());
    }

    #[tokio::test]
    async fn test_ping_true_when_destination_answers() {
        let runner = FakeRunner::default()
            .canned("inspect ping", r#"{"worker.q1": {"ok": "pong"}}"#);
        assert!(client(&runner).ping("worker.q1").await.expect("ping"));
    }

    #[tokio::test]
    async fn test_registered_tasks_collects_names() {
        let runner = FakeRunner::default().canned(
            "inspect registered",
            r#"{"worker.q1": ["pkg.tasks.install", "pkg.tasks.remove"]}"#,
        );
        let tasks = client(&runner)
            .registered_tasks("worker.q1")
            .await
            .expect("registered query");
        assert_eq!(tasks.len(), 2);
        assert!(tasks.contains("pkg.tasks.install"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let runner = FakeRunner::default().canned("inspect stats", "not json");
        assert!(client(&runner).stats("worker.q1").await.is_err());
    }

    #[tokio::test]
    async fn test_inspect_binary_path_derives_from_runtime_root() {
        let runner = FakeRunner::default().canned("inspect ping", "{}");
        let _ = client(&runner).ping("worker.q1").await;
        let commands = runner.commands();
        assert!(
            commands[0].starts_with("/opt/corral/bin/worker inspect ping"),
            "got: {}",
            commands[0]
        );
    }
}
