//! Field checks shared by every agent kind.

use serde_yaml::{Mapping, Value};

use crate::rules::RuleSet;
use crate::validation::engine::ValidationResult;

/// One error per required field missing from `mapping`
pub fn check_required_fields(mapping: &Mapping, fields: &[String], result: &mut ValidationResult) {
    for field in fields {
        if !mapping.contains_key(field.as_str()) {
            result.add_field_error(field, format!("Missing required field: '{}'", field));
        }
    }
}

pub fn check_spec_version(mapping: &Mapping, rules: &RuleSet, result: &mut ValidationResult) {
    if let Some(version) = mapping.get("spec_version")
        && version.as_str() != Some(rules.spec_version.as_str())
    {
        result.add_field_error(
            "spec_version",
            format!("spec_version must be '{}'", rules.spec_version),
        );
    }
}

pub fn check_name(mapping: &Mapping, result: &mut ValidationResult) {
    let Some(name) = set_value(mapping, "name") else {
        return;
    };

    match name.as_str() {
        Some(name) if is_valid_agent_name(name) => {}
        Some(_) => result.add_field_error(
            "name",
            "Agent name should contain only alphanumeric characters, underscores, and hyphens"
                .to_string(),
        ),
        None => result.add_field_error("name", "'name' must be a string".to_string()),
    }
}

/// Letters, digits, `_` and `-`, with at least one letter or digit
pub fn is_valid_agent_name(name: &str) -> bool {
    let mut has_alphanumeric = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            has_alphanumeric = true;
        } else if c != '_' && c != '-' {
            return false;
        }
    }
    has_alphanumeric
}

/// Error unless `field` is absent, null, or a sequence
pub fn check_sequence(mapping: &Mapping, field: &str, result: &mut ValidationResult) {
    if let Some(value) = mapping.get(field)
        && !value.is_null()
        && !value.is_sequence()
    {
        result.add_field_error(field, format!("'{}' must be a list", field));
    }
}

/// Error unless `field` is absent, null, or a mapping
pub fn check_mapping(mapping: &Mapping, field: &str, result: &mut ValidationResult) {
    check_mapping_at(mapping, field, field, result);
}

/// Same as `check_mapping`, reporting the field under `path`
pub fn check_mapping_at(
    mapping: &Mapping,
    field: &str,
    path: &str,
    result: &mut ValidationResult,
) {
    if let Some(value) = mapping.get(field)
        && !value.is_null()
        && !value.is_mapping()
    {
        result.add_field_error(path, format!("'{}' must be a dictionary", path));
    }
}

/// Scalars YAML 1.1 resolves to booleans
const YAML_1_1_BOOLS: &[&str] = &[
    "yes", "Yes", "YES", "no", "No", "NO", "true", "True", "TRUE", "false", "False", "FALSE",
    "on", "On", "ON", "off", "Off", "OFF",
];

/// True for a boolean, or a string YAML 1.1 readers such as the importer treat as one
pub fn is_yaml_bool(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::String(s) => YAML_1_1_BOOLS.contains(&s.as_str()),
        _ => false,
    }
}

/// Error when `field` is present but not `true`/`false`
pub fn check_boolean(mapping: &Mapping, field: &str, result: &mut ValidationResult) {
    if let Some(value) = mapping.get(field)
        && !is_yaml_bool(value)
    {
        result.add_field_error(field, format!("'{}' must be a boolean (true/false)", field));
    }
}

/// The value of `field` unless it is absent, null, or an empty string
pub fn set_value<'a>(mapping: &'a Mapping, field: &str) -> Option<&'a Value> {
    match mapping.get(field)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        value => Some(value),
    }
}
