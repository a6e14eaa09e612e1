//! Structured logging setup.
//!
//! All diagnostics go through `tracing` and are written to stderr, which keeps
//! stdout free for the outbound UI messages the shim prints.
//!
//! # Configuration
//!
//! The log filter is resolved in this order:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use varexport::observability::init_tracing;
//! use varexport::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod init;

pub use init::init_tracing;
