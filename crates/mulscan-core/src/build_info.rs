//! Build metadata embedded by the build script.

/// Short git commit hash at build time, or `"unknown"` outside a checkout.
pub const GIT_HASH: &str = env!("MULSCAN_GIT_HASH");

/// Build time as seconds since the Unix epoch.
pub const BUILD_TIMESTAMP: &str = env!("MULSCAN_BUILD_TIMESTAMP");

/// Cargo build profile (`debug` or `release`).
pub const BUILD_PROFILE: &str = env!("MULSCAN_BUILD_PROFILE");

/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version string for startup logs, e.g. `"0.1.0 (abc1234, debug)"`.
pub fn version_string() -> String {
    format!("{VERSION} ({GIT_HASH}, {BUILD_PROFILE})")
}
