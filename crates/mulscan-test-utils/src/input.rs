//! Temporary puzzle inputs.

use std::path::{Path, PathBuf};

use mulscan_config::AppConfig;
use tempfile::TempDir;

use crate::config::TestConfigBuilder;

/// An `input.txt` inside an owned temp directory.
///
/// The directory (including any match log written next to the input) is
/// removed when this value is dropped, even on panic.
pub struct TempInput {
    input_path: PathBuf,
    log_path: PathBuf,
    _temp_dir: TempDir,
}

impl TempInput {
    /// Write `content` to a fresh `input.txt`.
    pub fn with_content(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let input_path = temp_dir.path().join("input.txt");
        std::fs::write(&input_path, content).expect("failed to write test input");
        Self {
            log_path: temp_dir.path().join("output_me.txt"),
            input_path,
            _temp_dir: temp_dir,
        }
    }

    /// Write `lines` to `input.txt`, each terminated by `\n`.
    pub fn with_lines(lines: &[&str]) -> Self {
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        Self::with_content(&content)
    }

    pub fn path(&self) -> &Path {
        &self.input_path
    }

    /// Where [`config_with_log`](Self::config_with_log) sends the match log.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Config reading this input with the match log disabled.
    pub fn config(&self) -> AppConfig {
        TestConfigBuilder::new().input_path(&self.input_path).build()
    }

    /// Config reading this input and logging matches to [`log_path`](Self::log_path).
    pub fn config_with_log(&self) -> AppConfig {
        TestConfigBuilder::new()
            .input_path(&self.input_path)
            .match_log(&self.log_path)
            .build()
    }

    /// Lines of the match log, or empty if it was never written.
    pub fn read_log(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log_path)
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Overwrite the input file.
    pub fn write(&self, content: &str) {
        std::fs::write(&self.input_path, content).expect("failed to rewrite test input");
    }
}
