//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only ever talks to the
//! `log` facade; the binary picks the backend by calling [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
