//! Validation Engine
//!
//! Loads a document, classifies it by `kind`, and runs the matching rule
//! set. Every rule reports into a shared `ValidationResult` so one pass
//! surfaces all problems instead of stopping at the first.

use std::fmt;
use std::path::Path;

use serde_yaml::Mapping;

use crate::document::{self, DocumentError};
use crate::error::ValidateError;
use crate::rules::RuleSet;
use crate::validation::kind::AgentKind;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A diagnostic message for a validation issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Path of the offending field, e.g. `guidelines[0].condition`
    pub field: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of validating one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: String) {
        self.push(Severity::Error, None, message);
    }

    pub fn add_field_error(&mut self, field: &str, message: String) {
        self.push(Severity::Error, Some(field.to_string()), message);
    }

    pub fn add_field_warning(&mut self, field: &str, message: String) {
        self.push(Severity::Warning, Some(field.to_string()), message);
    }

    fn push(&mut self, severity: Severity, field: Option<String>, message: String) {
        log::trace!("{}: {}", severity, message);
        self.diagnostics.push(Diagnostic {
            severity,
            message,
            field,
        });
    }

    /// True when no error-severity diagnostic was recorded
    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.by_severity(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

/// Validate a document stored on disk
///
/// A missing or undecodable file is reported as a diagnostic; only
/// unexpected I/O failures such as permission errors return `Err`.
pub fn validate_file(path: &Path, rules: &RuleSet) -> Result<ValidationResult, ValidateError> {
    log::debug!("Validating agent file {}", path.display());

    match document::read_document(path) {
        Ok(content) => Ok(validate_document(&content, rules)),
        Err(DocumentError::Io { path, source }) => Err(ValidateError::Io { path, source }),
        Err(e) => Ok(structural_failure(e)),
    }
}

/// Validate raw document text
pub fn validate_document(content: &str, rules: &RuleSet) -> ValidationResult {
    match document::parse_document(content) {
        Ok(mapping) => validate_mapping(&mapping, rules),
        Err(e) => structural_failure(e),
    }
}

/// Validate an already parsed root mapping
pub fn validate_mapping(mapping: &Mapping, rules: &RuleSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    match AgentKind::classify(mapping) {
        Some(kind) => {
            log::debug!("Classified document as {} agent", kind);
            kind.validate(mapping, rules, &mut result);
        }
        None => {
            result.add_field_error(
                "kind",
                format!(
                    "Invalid or missing 'kind'. Must be one of: {}",
                    crate::rules::format_list(&AgentKind::names())
                ),
            );
        }
    }

    log::debug!(
        "Validation finished with {} error(s) and {} warning(s)",
        result.error_count(),
        result.warning_count()
    );
    result
}

fn structural_failure(error: DocumentError) -> ValidationResult {
    log::debug!("Structural failure: {}", error);
    let mut result = ValidationResult::new();
    result.add_error(error.to_string());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());

        result.add_field_warning("llm", "Test warning".to_string());
        assert!(result.is_valid()); // Warnings don't make it invalid

        result.add_error("Test error".to_string());
        assert!(!result.is_valid()); // Errors make it invalid
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_structural_failures_halt() {
        let rules = RuleSet::builtin();

        let result = validate_document("", rules);
        assert!(!result.is_valid());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].message, "Empty YAML file");

        let result = validate_document("kind: [native\nname: x", rules);
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.starts_with("Invalid YAML syntax"));
    }

    #[test]
    fn test_missing_kind_skips_field_checks() {
        let result = validate_document("name: 'bad name!'\nspec_version: v9\n", RuleSet::builtin());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].field.as_deref(), Some("kind"));
        assert!(result.diagnostics[0].message.contains("'native', 'external'"));
    }

    #[test]
    fn test_validate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_file(&dir.path().join("nope.yaml"), RuleSet::builtin()).unwrap();
        assert!(!result.is_valid());
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.starts_with("File not found"));
    }

    #[test]
    fn test_validate_directory_is_hard_failure() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_file(dir.path(), RuleSet::builtin()).is_err());
    }
}
