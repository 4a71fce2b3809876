//! Rule Table
//!
//! Immutable lookup tables used for membership checks.

use std::sync::LazyLock;

const SPEC_VERSION: &str = "v1";

/// Style assumed when a native agent omits `style`
pub const DEFAULT_STYLE: &str = "default";

const STYLES: &[&str] = &["default", "react", "planner"];

const LLM_PROVIDERS: &[&str] = &["watsonx", "openai", "anthropic"];

const EXTERNAL_PROVIDERS: &[&str] = &["external_chat", "external_chat/A2A/0.2.1", "wx.ai"];

const AUTH_SCHEMES: &[&str] = &["BEARER_TOKEN", "API_KEY", "NONE"];

const NATIVE_REQUIRED: &[&str] = &["spec_version", "kind", "name", "description", "llm"];

const EXTERNAL_REQUIRED: &[&str] = &["spec_version", "kind", "name", "description", "api_url"];

static BUILTIN: LazyLock<RuleSet> = LazyLock::new(RuleSet::new);

/// Per-kind rule data
#[derive(Debug, Clone, PartialEq)]
pub struct KindRules {
    pub required_fields: Vec<String>,
}

impl KindRules {
    fn from_slice(fields: &[&str]) -> Self {
        Self {
            required_fields: to_owned(fields),
        }
    }
}

/// Complete set of rule tables for one validation run
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub spec_version: String,
    pub styles: Vec<String>,
    pub llm_providers: Vec<String>,
    pub external_providers: Vec<String>,
    pub auth_schemes: Vec<String>,
    pub native: KindRules,
    pub external: KindRules,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet {
    /// Build the rule tables matching the platform's current import schema
    pub fn new() -> Self {
        Self {
            spec_version: SPEC_VERSION.to_string(),
            styles: to_owned(STYLES),
            llm_providers: to_owned(LLM_PROVIDERS),
            external_providers: to_owned(EXTERNAL_PROVIDERS),
            auth_schemes: to_owned(AUTH_SCHEMES),
            native: KindRules::from_slice(NATIVE_REQUIRED),
            external: KindRules::from_slice(EXTERNAL_REQUIRED),
        }
    }

    /// Shared process-wide copy of the built-in tables
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    pub fn is_valid_style(&self, style: &str) -> bool {
        contains(&self.styles, style)
    }

    pub fn is_known_llm_provider(&self, provider: &str) -> bool {
        contains(&self.llm_providers, provider)
    }

    pub fn is_known_external_provider(&self, provider: &str) -> bool {
        contains(&self.external_providers, provider)
    }

    pub fn is_valid_auth_scheme(&self, scheme: &str) -> bool {
        contains(&self.auth_schemes, scheme)
    }
}

/// Render a table the way diagnostics quote it: `['a', 'b']`
pub fn format_list<S: AsRef<str>>(values: &[S]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|v| format!("'{}'", v.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

fn contains(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| v == needle)
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}
