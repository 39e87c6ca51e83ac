//! Infrastructure layer for toolgate
//!
//! Concrete adapters for the application layer's ports: the
//! [`LocalToolRunner`] that performs file I/O, process execution, and HTTP
//! requests, the default capability catalog, and figment-based configuration
//! loading.

pub mod config;
pub mod tools;

pub use config::{ConfigLoader, FileConfig};
pub use tools::{default_catalog, ExecutionError, LocalToolRunner};
