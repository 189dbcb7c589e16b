#![deny(unsafe_code)]

//! mulscan CLI: sums `mul(a,b)` instructions in a text file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mulscan_config::AppConfig;
use mulscan_core::{Solver, build_info};

/// mulscan: sum the products of `mul(a,b)` calls, with and without
/// `do()` / `don't()` gating.
#[derive(Debug, Parser)]
#[command(name = "mulscan", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, default_value = "mulscan.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Input file to scan (overrides `input.path`).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Append counted part-two matches to the match log.
    #[arg(long)]
    log_matches: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the sums for both parts (default).
    Solve,

    /// Validate and display configuration.
    Config {
        /// Show the resolved configuration.
        #[arg(long)]
        show: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration.
    fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(input) = &self.input {
            config.input.path = input.clone();
        }
        if self.log_matches {
            config.match_log.enabled = true;
        }
        config
    }

    /// Tracing filter directive: `-v` flags win over the configured level.
    fn filter_directive<'a>(&self, config: &'a AppConfig) -> &'a str {
        match self.verbose {
            0 => config.logging.level.as_str(),
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, from_file) = load_config(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.filter_directive(&config))),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(
        version = %build_info::version_string(),
        built = build_info::BUILD_TIMESTAMP,
        "mulscan starting"
    );
    if from_file {
        debug!(path = %cli.config.display(), "Using configuration file");
    } else {
        info!(path = %cli.config.display(), "Config file not found, using defaults");
    }

    let config = cli.apply_overrides(config);

    match cli.command {
        Some(Commands::Config { show }) => cmd_config(&cli.config, &config, show)?,
        Some(Commands::Solve) | None => cmd_solve(config)?,
    }

    Ok(())
}

fn cmd_solve(config: AppConfig) -> Result<()> {
    let input = config.input.path.clone();
    let report = Solver::new(config)
        .run()
        .with_context(|| format!("failed to scan '{}'", input.display()))?;
    println!("{report}");
    Ok(())
}

fn cmd_config(config_path: &Path, config: &AppConfig, show: bool) -> Result<()> {
    config.validate()?;
    if show {
        let toml_str = toml::to_string_pretty(config).context("failed to render configuration")?;
        println!("{toml_str}");
    } else {
        println!("Configuration at '{}' is valid.", config_path.display());
    }
    Ok(())
}

/// Load the config file if present, otherwise defaults. The flag reports
/// whether a file was read.
fn load_config(path: &Path) -> Result<(AppConfig, bool)> {
    if path.exists() {
        let config = AppConfig::load(path)
            .with_context(|| format!("invalid configuration at '{}'", path.display()))?;
        Ok((config, true))
    } else {
        Ok((AppConfig::default(), false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mulscan_test_utils::TempInput;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["mulscan"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("mulscan.toml"));
        assert!(cli.command.is_none());

        let config = cli.apply_overrides(AppConfig::default());
        assert_eq!(config.input.path, PathBuf::from("input.txt"));
        assert!(!config.match_log.enabled);
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::try_parse_from(["mulscan", "-i", "day3.txt", "--log-matches", "solve"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Solve)));

        let config = cli.apply_overrides(AppConfig::default());
        assert_eq!(config.input.path, PathBuf::from("day3.txt"));
        assert!(config.match_log.enabled);
    }

    #[test]
    fn test_verbosity_overrides_config_level() {
        let config = AppConfig::default();
        let quiet = Cli::try_parse_from(["mulscan"]).unwrap();
        assert_eq!(quiet.filter_directive(&config), "info");
        let loud = Cli::try_parse_from(["mulscan", "-vv"]).unwrap();
        assert_eq!(loud.filter_directive(&config), "trace");
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["mulscan", "config", "--show"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { show: true })));
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let (config, from_file) = load_config(Path::new("/nonexistent/mulscan.toml")).unwrap();
        assert!(!from_file);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let fixture = TempInput::with_content("[logging]\nlevel = \"loud\"\n");
        assert!(load_config(fixture.path()).is_err());
    }

    #[test]
    fn test_solve_reads_input() {
        let fixture = TempInput::with_content("mul(2,3)");
        assert!(cmd_solve(fixture.config()).is_ok());
    }
}
