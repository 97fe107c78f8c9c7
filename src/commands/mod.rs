//! Command implementations

pub mod create;
pub mod delete;
pub mod register;
pub mod restart;
pub mod start;
pub mod stop;
