#![deny(unsafe_code)]

//! Shared test utilities for the mulscan workspace.
//!
//! Provides temporary input fixtures, config builders, and tracing helpers so
//! that individual crate tests stay concise and consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! mulscan-test-utils = { workspace = true }
//! ```

pub mod config;
pub mod input;
pub mod tracing_setup;

pub use config::TestConfigBuilder;
pub use input::TempInput;
