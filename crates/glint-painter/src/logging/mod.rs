//! Logger setup for hosts that do not install their own.
//!
//! The painter itself only uses the `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
