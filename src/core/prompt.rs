//! The unit of work that executors run and remote clients send.
//!
//! Fields this crate does not model are kept in `extra` so that a prompt
//! passes through encode and decode unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Which kind of model call a prompt needs.
///
/// Variants this crate does not know about are carried as [`ModelVariant::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelVariant {
    Chat,
    Completion,
    Other(String),
}

impl ModelVariant {
    pub fn as_str(&self) -> &str {
        match self {
            ModelVariant::Chat => "CHAT",
            ModelVariant::Completion => "COMPLETION",
            ModelVariant::Other(variant) => variant,
        }
    }
}

impl From<String> for ModelVariant {
    fn from(variant: String) -> Self {
        match variant.as_str() {
            "CHAT" => ModelVariant::Chat,
            "COMPLETION" => ModelVariant::Completion,
            _ => ModelVariant::Other(variant),
        }
    }
}

impl From<ModelVariant> for String {
    fn from(variant: ModelVariant) -> Self {
        match variant {
            ModelVariant::Other(variant) => variant,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRequirements {
    pub model_variant: ModelVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ModelRequirements {
    fn default() -> Self {
        Self {
            model_variant: ModelVariant::Chat,
            model_name: None,
            extra: Map::new(),
        }
    }
}

/// A single prompt ready for execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub model_requirements: ModelRequirements,
    /// URL of the promptbook (and template anchor) this prompt was built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promptbook_url: Option<String>,
    #[serde(default)]
    pub parameters: HashMap<String, String>,
    /// Everything else the sender put on the prompt (expectations,
    /// postprocessing, ...), passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Prompt {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            model_requirements: ModelRequirements::default(),
            promptbook_url: None,
            parameters: HashMap::new(),
            extra: Map::new(),
        }
    }

    pub fn model_requirements(mut self, requirements: ModelRequirements) -> Self {
        self.model_requirements = requirements;
        self
    }

    pub fn promptbook_url(mut self, url: impl Into<String>) -> Self {
        self.promptbook_url = Some(url.into());
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}
