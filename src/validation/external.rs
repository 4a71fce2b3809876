//! Rules for `kind: external` agents.

use serde_yaml::Mapping;

use crate::rules::{format_list, RuleSet};
use crate::validation::checks::{
    check_mapping, check_name, check_required_fields, check_sequence, check_spec_version,
    set_value,
};
use crate::validation::engine::ValidationResult;
use crate::validation::kind::AgentKind;

/// Validate an external agent definition
pub fn validate(mapping: &Mapping, rules: &RuleSet, result: &mut ValidationResult) {
    check_required_fields(mapping, AgentKind::External.required_fields(rules), result);
    check_spec_version(mapping, rules, result);
    check_name(mapping, result);

    if let Some(api_url) = set_value(mapping, "api_url") {
        let is_http = api_url
            .as_str()
            .is_some_and(|url| url.starts_with("http://") || url.starts_with("https://"));
        if !is_http {
            result.add_field_error(
                "api_url",
                "api_url must be a valid HTTP/HTTPS URL".to_string(),
            );
        }
    }

    // Unknown providers may still be accepted downstream
    if let Some(provider) = set_value(mapping, "provider") {
        match provider.as_str() {
            Some(provider) if rules.is_known_external_provider(provider) => {}
            Some(provider) => result.add_field_warning(
                "provider",
                format!(
                    "Provider '{}' is not in common providers: {}",
                    provider,
                    format_list(&rules.external_providers)
                ),
            ),
            None => result.add_field_error("provider", "'provider' must be a string".to_string()),
        }
    }

    if let Some(scheme) = set_value(mapping, "auth_scheme") {
        match scheme.as_str() {
            Some(scheme) if rules.is_valid_auth_scheme(scheme) => {}
            Some(scheme) => result.add_field_error(
                "auth_scheme",
                format!(
                    "Invalid auth_scheme '{}'. Must be one of: {}",
                    scheme,
                    format_list(&rules.auth_schemes)
                ),
            ),
            None => result.add_field_error(
                "auth_scheme",
                "'auth_scheme' must be a string".to_string(),
            ),
        }
    }

    check_mapping(mapping, "auth_config", result);
    check_mapping(mapping, "chat_params", result);
    check_mapping(mapping, "config", result);
    check_sequence(mapping, "tags", result);
}
