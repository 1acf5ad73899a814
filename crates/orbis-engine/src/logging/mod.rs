//! Logging utilities.
//!
//! Library code only emits through the `log` facade. Binaries call
//! [`init_logging`] once to install `env_logger` as the backend.

mod init;

pub use init::{init_logging, LoggingConfig};
