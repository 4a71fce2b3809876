//! Agent Validator
//!
//! Pre-import linting for declarative agent definitions of a multi-agent
//! orchestration platform.
//!
//! This library provides:
//! - YAML document loading with structural checks
//! - Kind-specific validation rules for native and external agents
//! - Built-in rule tables with TOML overrides
//! - Human-readable reports and the command-line driver

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod report;
pub mod rules;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use error::ValidateError;
pub use rules::RuleSet;
pub use validation::{
    validate_document, validate_file, AgentKind, Diagnostic, Severity, ValidationResult,
};
