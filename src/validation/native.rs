//! Rules for `kind: native` agents.

use serde_yaml::{Mapping, Value};

use crate::rules::{format_list, RuleSet, DEFAULT_STYLE};
use crate::validation::checks::{
    check_boolean, check_mapping_at, check_name, check_required_fields, check_sequence,
    check_spec_version, is_yaml_bool, set_value,
};
use crate::validation::engine::ValidationResult;
use crate::validation::kind::AgentKind;

const GUIDELINE_FIELDS: &[&str] = &["display_name", "condition", "action"];

/// Validate a native agent definition
pub fn validate(mapping: &Mapping, rules: &RuleSet, result: &mut ValidationResult) {
    check_required_fields(mapping, AgentKind::Native.required_fields(rules), result);
    check_spec_version(mapping, rules, result);
    check_name(mapping, result);
    check_style(mapping, rules, result);

    if let Some(llm) = set_value(mapping, "llm") {
        match llm.as_str() {
            Some(llm) => check_llm(llm, rules, result),
            None => result.add_field_error("llm", "'llm' must be a string".to_string()),
        }
    }

    check_sequence(mapping, "tools", result);
    check_sequence(mapping, "collaborators", result);
    check_sequence(mapping, "knowledge_base", result);

    check_boolean(mapping, "hidden", result);
    check_boolean(mapping, "context_access_enabled", result);

    if let Some(guidelines) = mapping.get("guidelines") {
        check_guidelines(guidelines, result);
    }
    if let Some(chat_with_docs) = mapping.get("chat_with_docs") {
        check_chat_with_docs(chat_with_docs, result);
    }

    check_sequence(mapping, "context_variables", result);
    check_sequence(mapping, "tags", result);
}

fn check_style(mapping: &Mapping, rules: &RuleSet, result: &mut ValidationResult) {
    let style = match mapping.get("style") {
        None => DEFAULT_STYLE,
        Some(value) => match value.as_str() {
            Some(style) => style,
            None => {
                result.add_field_error("style", "'style' must be a string".to_string());
                return;
            }
        },
    };

    if !rules.is_valid_style(style) {
        result.add_field_error(
            "style",
            format!(
                "Invalid style '{}'. Must be one of: {}",
                style,
                format_list(&rules.styles)
            ),
        );
    }
}

/// Model references look like `provider/developer/model_id`
fn check_llm(llm: &str, rules: &RuleSet, result: &mut ValidationResult) {
    let segments: Vec<&str> = llm.split('/').collect();
    if segments.len() < 2 {
        result.add_field_error(
            "llm",
            format!(
                "LLM format should be 'provider/developer/model_id', got: '{}'",
                llm
            ),
        );
        return;
    }

    let provider = segments[0];
    if !rules.is_known_llm_provider(provider) {
        result.add_field_warning(
            "llm",
            format!(
                "LLM provider '{}' is not in common providers: {}",
                provider,
                format_list(&rules.llm_providers)
            ),
        );
    }
}

fn check_guidelines(guidelines: &Value, result: &mut ValidationResult) {
    let Some(entries) = guidelines.as_sequence() else {
        result.add_field_error("guidelines", "'guidelines' must be a list".to_string());
        return;
    };

    for (i, entry) in entries.iter().enumerate() {
        let Some(entry) = entry.as_mapping() else {
            result.add_field_error(
                &format!("guidelines[{}]", i),
                format!("Guideline {} must be a dictionary", i),
            );
            continue;
        };

        for key in GUIDELINE_FIELDS {
            if !entry.contains_key(*key) {
                result.add_field_error(
                    &format!("guidelines[{}].{}", i, key),
                    format!("Guideline {} missing required field: '{}'", i, key),
                );
            }
        }
    }
}

fn check_chat_with_docs(chat_with_docs: &Value, result: &mut ValidationResult) {
    if chat_with_docs.is_null() {
        return;
    }
    let Some(block) = chat_with_docs.as_mapping() else {
        result.add_field_error(
            "chat_with_docs",
            "'chat_with_docs' must be a dictionary".to_string(),
        );
        return;
    };

    if let Some(enabled) = block.get("enabled")
        && !is_yaml_bool(enabled)
    {
        result.add_field_error(
            "chat_with_docs.enabled",
            "'chat_with_docs.enabled' must be a boolean".to_string(),
        );
    }
    check_mapping_at(block, "vector_index", "chat_with_docs.vector_index", result);
}
