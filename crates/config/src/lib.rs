//! Configuration management for the SSM loader
//!
//! This crate captures the process environment once, and turns the
//! `SSM_`-namespaced settings in it into a validated [`RunConfig`].

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::Environment;
pub use loader::ConfigLoader;
pub use schema::*;
