//! Rule Tables
//!
//! Enumerated reference data the validator checks documents against.
//! The built-in tables mirror the import schema of the orchestration
//! platform; a TOML rule file can override any of them.

pub mod file;
pub mod table;

pub use file::RuleFile;
pub use table::{format_list, KindRules, RuleSet, DEFAULT_STYLE};
