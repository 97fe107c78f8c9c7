//! `corral create` — construct a daemon, install its artifacts, persist it.

use anyhow::Result;
use clap::Args;
use serde_json::{Map, Value};

use crate::app::AppContext;
use crate::domain::DaemonParams;
use crate::pm::{self, DaemonDriver};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Daemon name (generated when omitted)
    #[arg(long, env = "CORRAL_DAEMON_NAME")]
    pub name: Option<String>,

    /// Task queue the worker consumes from (defaults to `<name>-queue`)
    #[arg(long, env = "CORRAL_DAEMON_QUEUE")]
    pub queue: Option<String>,

    /// Address the worker reports as its own
    #[arg(long, env = "CORRAL_DAEMON_HOST")]
    pub host: Option<String>,

    /// Manager address the worker reports back to
    #[arg(long, env = "CORRAL_MANAGER_IP")]
    pub manager_ip: Option<String>,

    /// System user the daemon runs as
    #[arg(long, env = "CORRAL_DAEMON_USER")]
    pub user: Option<String>,

    /// Working directory for includes file, pid and crash dumps
    #[arg(long, env = "CORRAL_DAEMON_WORKDIR")]
    pub workdir: Option<String>,

    /// Broker host, composed into the default AMQP URL
    #[arg(long)]
    pub broker_ip: Option<String>,

    /// Broker port, composed into the default AMQP URL
    #[arg(long)]
    pub broker_port: Option<u16>,

    /// Full broker URL (overrides --broker-ip/--broker-port)
    #[arg(long)]
    pub broker_url: Option<String>,

    /// Manager REST port
    #[arg(long)]
    pub manager_port: Option<u16>,

    /// Autoscale lower bound
    #[arg(long)]
    pub min_workers: Option<u64>,

    /// Autoscale upper bound
    #[arg(long)]
    pub max_workers: Option<u64>,

    /// Process management convention
    #[arg(
        long,
        default_value = pm::initd::PROCESS_MANAGEMENT,
        env = "CORRAL_PROCESS_MANAGEMENT"
    )]
    pub process_management: String,

    /// Relax sudo's requiretty directive before creating the daemon
    #[arg(long)]
    pub disable_requiretty: bool,

    /// Fix up a runtime that was installed at a different path
    #[arg(long)]
    pub relocated: bool,
}

impl CreateArgs {
    fn params(&self) -> DaemonParams {
        let mut optional = Map::new();
        if let Some(workdir) = &self.workdir {
            optional.insert("workdir".into(), Value::from(workdir.clone()));
        }
        if let Some(broker_ip) = &self.broker_ip {
            optional.insert("broker_ip".into(), Value::from(broker_ip.clone()));
        }
        if let Some(broker_port) = self.broker_port {
            optional.insert("broker_port".into(), Value::from(broker_port));
        }
        if let Some(broker_url) = &self.broker_url {
            optional.insert("broker_url".into(), Value::from(broker_url.clone()));
        }
        if let Some(manager_port) = self.manager_port {
            optional.insert("manager_port".into(), Value::from(manager_port));
        }
        if let Some(min_workers) = self.min_workers {
            optional.insert("min_workers".into(), Value::from(min_workers));
        }
        if let Some(max_workers) = self.max_workers {
            optional.insert("max_workers".into(), Value::from(max_workers));
        }
        if self.disable_requiretty {
            optional.insert("disable_requiretty".into(), Value::from(true));
        }
        if self.relocated {
            optional.insert("relocated".into(), Value::from(true));
        }
        DaemonParams {
            name: self.name.clone(),
            queue: self.queue.clone(),
            host: self.host.clone(),
            manager_ip: self.manager_ip.clone(),
            user: self.user.clone(),
            optional,
        }
    }
}

/// Run `corral create`.
///
/// # Errors
///
/// Returns an error when validation fails, an artifact already exists, or
/// the daemon document cannot be persisted.
pub async fn run(app: &AppContext, args: &CreateArgs) -> Result<()> {
    let factory = app.factory();
    let daemon = factory
        .create(&args.process_management, args.params())
        .await?;

    let control = app.control();
    let driver = DaemonDriver::dispatch(daemon, app.runtime_root(), &app.runner, &control)?;
    driver.create().await?;
    factory.save(driver.daemon()).await?;

    let daemon = driver.daemon();
    app.output.success(&format!("Created daemon: {}", daemon.name));
    app.output.kv("queue", &daemon.queue);
    app.output.kv("broker", &daemon.broker_url);
    app.output.kv("destination", &daemon.destination());
    Ok(())
}
