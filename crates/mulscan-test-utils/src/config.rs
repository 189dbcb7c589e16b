//! Configuration builders for tests.

use std::path::Path;

use mulscan_config::AppConfig;

/// Fluent builder for [`AppConfig`] in tests.
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .input_path("day3.txt")
///     .match_log("muls.txt")
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: AppConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn input_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.input.path = path.as_ref().to_path_buf();
        self
    }

    /// Enable the match log, writing to `path`.
    pub fn match_log(mut self, path: impl AsRef<Path>) -> Self {
        self.config.match_log.enabled = true;
        self.config.match_log.path = path.as_ref().to_path_buf();
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
