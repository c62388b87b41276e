//! Logger setup for binaries embedding the engine.

mod init;

pub use init::{LoggingConfig, init_logging};
