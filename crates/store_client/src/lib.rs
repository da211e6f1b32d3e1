//! Parameter store clients
//!
//! This crate defines the [`ParameterStore`] seam the resolver talks to,
//! the AWS Systems Manager implementation used in production and an
//! in-memory fake for tests.

pub mod memory;
pub mod ssm;
pub mod store;

pub use memory::*;
pub use ssm::*;
pub use store::*;
