//! Logging utilities.
//!
//! Library code only talks to the `log` facade; this module wires up
//! `env_logger` for binaries and demos.

mod init;

pub use init::{init_logging, LoggingConfig};
