use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The identity under which a promptbook is stored in a registry.
pub type PromptbookUrl = String;

/// A parsed promptbook definition.
///
/// The definition is opaque to this crate apart from its `promptbookUrl`
/// (and `title`, which is only used for diagnostics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptbookJson(Value);

impl PromptbookJson {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The identifying URL of this promptbook, if it has one.
    ///
    /// An empty string counts as missing: such a promptbook is anonymous.
    pub fn promptbook_url(&self) -> Option<&str> {
        self.0
            .get("promptbookUrl")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// Anonymous promptbooks can run standalone but cannot be registered.
    pub fn is_anonymous(&self) -> bool {
        self.promptbook_url().is_none()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for PromptbookJson {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Raw textual content of a promptbook, before conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptbookString(String);

impl PromptbookString {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PromptbookString {
    fn from(content: String) -> Self {
        Self(content)
    }
}

impl From<&str> for PromptbookString {
    fn from(content: &str) -> Self {
        Self(content.to_string())
    }
}

/// One entry handed to registry construction: either an already-parsed
/// definition or text that still has to go through a converter.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptbookSource {
    Json(PromptbookJson),
    Text(PromptbookString),
}

impl From<PromptbookJson> for PromptbookSource {
    fn from(promptbook: PromptbookJson) -> Self {
        PromptbookSource::Json(promptbook)
    }
}

impl From<Value> for PromptbookSource {
    fn from(value: Value) -> Self {
        PromptbookSource::Json(PromptbookJson(value))
    }
}

impl From<PromptbookString> for PromptbookSource {
    fn from(content: PromptbookString) -> Self {
        PromptbookSource::Text(content)
    }
}

impl From<String> for PromptbookSource {
    fn from(content: String) -> Self {
        PromptbookSource::Text(PromptbookString(content))
    }
}

impl From<&str> for PromptbookSource {
    fn from(content: &str) -> Self {
        PromptbookSource::Text(PromptbookString::from(content))
    }
}
