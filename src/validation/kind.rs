//! Agent kinds
//!
//! The `kind` discriminator selects which rule set governs a document.

use std::fmt;

use serde_yaml::{Mapping, Value};

use crate::rules::RuleSet;
use crate::validation::engine::ValidationResult;
use crate::validation::{external, native};

/// Classification of an agent definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    /// Agent hosted and run by the orchestration platform itself
    Native,
    /// Agent reached over HTTP at an `api_url`
    External,
}

impl AgentKind {
    pub const ALL: [AgentKind; 2] = [AgentKind::Native, AgentKind::External];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Native => "native",
            AgentKind::External => "external",
        }
    }

    /// Names of every recognized kind, for diagnostics
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.as_str()).collect()
    }

    /// Match a kind name, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.into_iter().find(|k| k.as_str() == lower)
    }

    /// Determine the kind of a document from its `kind` field
    pub fn classify(mapping: &Mapping) -> Option<Self> {
        mapping.get("kind").and_then(Value::as_str).and_then(Self::parse)
    }

    /// Fields that must be present for this kind
    pub fn required_fields(self, rules: &RuleSet) -> &[String] {
        match self {
            AgentKind::Native => &rules.native.required_fields,
            AgentKind::External => &rules.external.required_fields,
        }
    }

    /// Apply this kind's rule set, appending diagnostics to `result`
    pub fn validate(self, mapping: &Mapping, rules: &RuleSet, result: &mut ValidationResult) {
        match self {
            AgentKind::Native => native::validate(mapping, rules, result),
            AgentKind::External => external::validate(mapping, rules, result),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
