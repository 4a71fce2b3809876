//! Rule File
//!
//! TOML overrides for the built-in rule tables. Every key is optional;
//! anything left out keeps its built-in value.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::table::{KindRules, RuleSet};

/// Root rule file structure (matches TOML)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    pub spec_version: Option<String>,
    pub styles: Option<Vec<String>>,
    pub llm_providers: Option<Vec<String>>,
    pub external_providers: Option<Vec<String>>,
    pub auth_schemes: Option<Vec<String>>,
    pub native: Option<KindSection>,
    pub external: Option<KindSection>,
}

/// `[native]` / `[external]` tables
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KindSection {
    pub required_fields: Option<Vec<String>>,
}

impl RuleFile {
    /// Parse rule file content
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse rule file")
    }

    /// Apply these overrides on top of an existing rule set
    pub fn apply(self, mut rules: RuleSet) -> RuleSet {
        if let Some(spec_version) = self.spec_version {
            rules.spec_version = spec_version;
        }
        if let Some(styles) = self.styles {
            rules.styles = styles;
        }
        if let Some(providers) = self.llm_providers {
            rules.llm_providers = providers;
        }
        if let Some(providers) = self.external_providers {
            rules.external_providers = providers;
        }
        if let Some(schemes) = self.auth_schemes {
            rules.auth_schemes = schemes;
        }
        apply_kind_section(self.native, &mut rules.native);
        apply_kind_section(self.external, &mut rules.external);
        rules
    }
}

fn apply_kind_section(section: Option<KindSection>, rules: &mut KindRules) {
    if let Some(fields) = section.and_then(|s| s.required_fields) {
        rules.required_fields = fields;
    }
}

impl RuleSet {
    /// Built-in tables with the overrides from `content` applied
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(RuleFile::parse(content)?.apply(RuleSet::new()))
    }

    /// Load a rule file from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid rule file {}", path.display()))
    }
}
