pub mod lint;

use thiserror::Error;
use tracing::debug;

use crate::templates::{ROOT_AGENT_INSTR, ROOT_AGENT_INSTR_V1, ROOT_AGENT_INSTR_V2};
use crate::utils::hash::{sha256_hex, sha256_short};

/// A named instruction body handed to the agent runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub version: u32,
    pub description: &'static str,
    pub body: &'static str,
}

impl Template {
    /// Full SHA-256 of the body, lowercase hex.
    pub fn fingerprint(&self) -> String {
        sha256_hex(self.body)
    }

    pub fn short_fingerprint(&self) -> String {
        sha256_short(self.body)
    }

    /// Export filename: `<NAME>_<short>.md`
    pub fn export_filename(&self) -> String {
        format!("{}_{}.md", self.name, self.short_fingerprint())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Template not found: {name}")]
    NotFound { name: String },
}

const TEMPLATES: &[Template] = &[
    Template {
        name: "ROOT_AGENT_INSTR",
        version: 2,
        description: "Travel concierge root agent (current)",
        body: ROOT_AGENT_INSTR,
    },
    Template {
        name: "ROOT_AGENT_INSTR_V1",
        version: 1,
        description: "Travel concierge root agent using google_search",
        body: ROOT_AGENT_INSTR_V1,
    },
    Template {
        name: "ROOT_AGENT_INSTR_V2",
        version: 2,
        description: "Travel concierge root agent delegating to inspiration_agent",
        body: ROOT_AGENT_INSTR_V2,
    },
];

/// Read-only lookup over the compiled-in templates.
///
/// The registry only borrows static data, so it is `Copy` and can be shared
/// across threads without synchronization.
#[derive(Debug, Clone, Copy)]
pub struct PromptRegistry {
    templates: &'static [Template],
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptRegistry {
    pub const fn new() -> Self {
        PromptRegistry {
            templates: TEMPLATES,
        }
    }

    /// Look up the exact body registered under `name`.
    pub fn get(&self, name: &str) -> Result<&'static str, RegistryError> {
        self.template(name).map(|t| t.body)
    }

    pub fn template(&self, name: &str) -> Result<&'static Template, RegistryError> {
        let found = self.templates.iter().find(|t| t.name == name);
        debug!(template = name, found = found.is_some(), "template lookup");
        found.ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.iter().any(|t| t.name == name)
    }

    /// Registered names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.templates.iter().map(|t| t.name)
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Look up a template body in the default registry.
pub fn get(name: &str) -> Result<&'static str, RegistryError> {
    PromptRegistry::new().get(name)
}
