//! Configuration management for the agent validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Rule file discovery

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::rules::RuleSet;

const RULES_FILE_NAME: &str = "rules.toml";

/// Command-line arguments for the agent validator
#[derive(Debug, Parser)]
#[command(name = "validate-agent")]
#[command(about = "Validate orchestration agent YAML files before import")]
#[command(version)]
pub struct Args {
    /// Agent definition files to validate
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Print the file being validated and a summary with counts
    #[arg(short, long)]
    pub verbose: bool,

    /// TOML file overriding the built-in rule tables
    #[arg(long, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Documents to validate, in order
    pub files: Vec<PathBuf>,
    /// Verbose report output
    pub verbose: bool,
    /// Rule file to load instead of the built-in tables
    pub rules_path: Option<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_dir = dirs::config_dir();
        let rules_path = resolve_rules_path(args.rules, config_dir.as_deref());

        Ok(Config {
            files: args.files,
            verbose: args.verbose,
            rules_path,
            log_level: args.log_level,
        })
    }

    /// Load the rule tables this run validates against
    pub fn load_rules(&self) -> Result<RuleSet> {
        match &self.rules_path {
            Some(path) => {
                log::debug!("Loading rule tables from {}", path.display());
                RuleSet::from_file(path)
            }
            None => Ok(RuleSet::builtin().clone()),
        }
    }
}

/// Pick the rule file for a run
///
/// Priority: explicit path > `<config_dir>/agent-validator/rules.toml` (when it
/// exists) > built-in tables (`None`).
pub fn resolve_rules_path(explicit: Option<PathBuf>, config_dir: Option<&Path>) -> Option<PathBuf> {
    explicit.or_else(|| {
        let path = config_dir?.join("agent-validator").join(RULES_FILE_NAME);
        path.is_file().then_some(path)
    })
}
