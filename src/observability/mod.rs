//! Structured logging to a size-rotated file.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → <data_dir>/country-explorer.log
//! ```
//!
//! # Configuration
//!
//! The filter is resolved from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! The log rotates at 10 MB and keeps three backups.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `file_writer`: rotating writer usable as a `MakeWriter`

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{filter_directive, init_tracing, LOG_FILE_NAME};
