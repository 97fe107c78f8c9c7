//! Corral — manage worker-agent daemons behind host service managers.
//!
//! A daemon is a persisted record (name, queue, broker, manager address)
//! plus the artifacts a host service manager needs to run its worker. The
//! crate layers:
//!
//! - [`domain`] — pure daemon construction and the typed error table
//! - [`application`] — ports (command runner, control plane) and the
//!   liveness probe loop
//! - [`infra`] — tokio process runner, privileged filesystem helper,
//!   inspect-based control plane, plugin module resolver
//! - [`pm`] — process-management drivers behind an explicit dispatch table
//! - [`factory`] — construction dispatch and JSON persistence
//! - [`cli`] / [`commands`] — the `corral` command surface

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod app;
pub mod application;
pub mod assets;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod factory;
pub mod infra;
pub mod output;
pub mod pm;
