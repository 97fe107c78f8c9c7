//! Shared test doubles for driver, factory, and resolver tests.
//!
//! `FakeRunner` records every invocation and serves canned stdout without
//! spawning processes; `FakeControlPlane` models worker liveness as a shared
//! flag the runner can flip on `service <name> start|stop`.

#![allow(clippy::expect_used)]

use std::collections::BTreeSet;
use std::process::Output;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use serde_json::{Map, Value, json};

use crate::application::ports::{CommandRunner, ControlPlane};

/// Build an `ExitStatus` from a logical exit code.
#[cfg(unix)]
pub fn exit_status(code: i32) -> std::process::ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(code << 8)
}

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn fail_output(stderr: &[u8]) -> Output {
    Output {
        status: exit_status(1),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

/// Command runner double — records commands, returns canned stdout.
#[derive(Debug, Default)]
pub struct FakeRunner {
    commands: Mutex<Vec<String>>,
    canned: Mutex<Vec<(String, String)>>,
    fail_matching: Mutex<Option<String>>,
    service_state: Option<Arc<AtomicBool>>,
}

impl FakeRunner {
    /// Serve `stdout` for any command line containing `needle`.
    pub fn canned(self, needle: &str, stdout: &str) -> Self {
        self.canned
            .lock()
            .expect("canned lock")
            .push((needle.to_string(), stdout.to_string()));
        self
    }

    /// Fail (exit 1) any command line containing `needle`.
    pub fn fail_on(self, needle: &str) -> Self {
        *self.fail_matching.lock().expect("fail lock") = Some(needle.to_string());
        self
    }

    /// Flip `state` on `service <name> start|stop` command lines.
    pub fn with_service_state(mut self, state: Arc<AtomicBool>) -> Self {
        self.service_state = Some(state);
        self
    }

    /// Every command line observed so far, program and args space-joined.
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().expect("commands lock").clone()
    }

    fn dispatch(&self, line: String) -> Output {
        self.commands.lock().expect("commands lock").push(line.clone());

        if let Some(state) = &self.service_state {
            if line.contains("service ") {
                if line.ends_with(" start") {
                    state.store(true, Ordering::SeqCst);
                } else if line.ends_with(" stop") {
                    state.store(false, Ordering::SeqCst);
                }
            }
        }

        if let Some(needle) = self.fail_matching.lock().expect("fail lock").as_deref() {
            if line.contains(needle) {
                return fail_output(b"injected failure");
            }
        }

        for (needle, stdout) in self.canned.lock().expect("canned lock").iter() {
            if line.contains(needle) {
                return ok_output(stdout.as_bytes());
            }
        }
        ok_output(b"")
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        Ok(self.dispatch(format!("{program} {}", args.join(" "))))
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        _timeout: Duration,
    ) -> Result<Output> {
        self.run(program, args).await
    }

    async fn sudo(&self, args: &[&str]) -> Result<Output> {
        Ok(self.dispatch(format!("sudo {}", args.join(" "))))
    }
}

/// Control-plane double backed by a shared liveness flag.
#[derive(Debug, Default)]
pub struct FakeControlPlane {
    alive: Arc<AtomicBool>,
    tasks: Mutex<BTreeSet<String>>,
}

impl FakeControlPlane {
    pub fn new(alive: Arc<AtomicBool>) -> Self {
        Self { alive, tasks: Mutex::new(BTreeSet::new()) }
    }

    pub fn alive_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.alive)
    }

    pub fn set_alive(&self, alive: bool) {
        self.alive.store(alive, Ordering::SeqCst);
    }

    pub fn add_task(&self, task: &str) {
        self.tasks.lock().expect("tasks lock").insert(task.to_string());
    }
}

impl ControlPlane for FakeControlPlane {
    async fn ping(&self, _destination: &str) -> Result<bool> {
        Ok(self.alive.load(Ordering::SeqCst))
    }

    async fn stats(&self, _destination: &str) -> Result<Option<Map<String, Value>>> {
        if self.alive.load(Ordering::SeqCst) {
            let mut stats = Map::new();
            stats.insert("pool".to_string(), json!({"processes": [1]}));
            Ok(Some(stats))
        } else {
            Ok(None)
        }
    }

    async fn registered_tasks(&self, _destination: &str) -> Result<BTreeSet<String>> {
        Ok(self.tasks.lock().expect("tasks lock").clone())
    }
}
