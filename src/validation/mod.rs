//! Validation Engine
//!
//! Kind dispatch and per-kind rule sets for agent definitions.

pub mod checks;
pub mod engine;
pub mod external;
pub mod kind;
pub mod native;

pub use engine::{
    validate_document, validate_file, validate_mapping, Diagnostic, Severity, ValidationResult,
};
pub use kind::AgentKind;
