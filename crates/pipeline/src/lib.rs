//! Parameter resolution pipeline
//!
//! The three stages that run after configuration is loaded: derive the
//! parameter list from the environment, resolve each entry against a
//! parameter store, and write the result file.

pub mod extract;
pub mod output;
pub mod resolve;

pub use extract::extract;
pub use output::{output_path, write_output};
pub use resolve::resolve;
