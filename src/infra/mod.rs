//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution,
//! privileged filesystem access, control-plane queries, plugin introspection,
//! and template rendering.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod control_plane;
pub mod fs;
pub mod resolver;
pub mod template;

#[cfg(test)]
pub(crate) mod test_support;
