//! File-based structured logging.
//!
//! `tracing` spans and events are written as JSON lines to a rotating log
//! file, by default `<data_dir>/kbase/kbase.log`. The terminal is never used
//! for log output.
//!
//! ```text
//! tracing macros → EnvFilter → fmt JSON layer → FileWriter → kbase.log (+3 backups)
//! ```
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `--log-level` flag, then `trace_level` in the config file
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
