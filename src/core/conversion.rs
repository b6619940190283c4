//! Converters and validators that registry construction delegates to.
//!
//! Both are stateless strategies handed to the
//! [`RegistryBuilder`](super::library::registry::RegistryBuilder) explicitly,
//! so nothing in the crate reaches for a global.

use serde_json::Value;

use super::error::{ConversionError, ValidationError};
use super::promptbook::{PromptbookJson, PromptbookString};

/// Turns the textual form of a promptbook into its parsed form.
pub trait PromptbookConverter: Send + Sync {
    fn convert(&self, source: &PromptbookString) -> Result<PromptbookJson, ConversionError>;
}

/// Checks a parsed promptbook for schema and semantic violations.
pub trait PromptbookValidator: Send + Sync {
    fn validate(&self, promptbook: &PromptbookJson) -> Result<(), ValidationError>;
}

/// Accepts the `.ptbk.json` textual form.
///
/// Markdown (`.ptbk.md`) sources need a dedicated converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSourceConverter;

impl PromptbookConverter for JsonSourceConverter {
    fn convert(&self, source: &PromptbookString) -> Result<PromptbookJson, ConversionError> {
        let value: Value = serde_json::from_str(source.as_str()).map_err(|e| {
            ConversionError::new(format!("source is not valid promptbook JSON: {}", e))
        })?;
        Ok(PromptbookJson::new(value))
    }
}

/// Structural checks on the handful of top-level fields every promptbook shares.
/// All violations are collected before reporting.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl PromptbookValidator for StructuralValidator {
    fn validate(&self, promptbook: &PromptbookJson) -> Result<(), ValidationError> {
        let Some(object) = promptbook.as_value().as_object() else {
            return Err(ValidationError::new("promptbook must be a JSON object"));
        };

        let mut issues = Vec::new();

        match object.get("promptbookUrl") {
            None | Some(Value::Null) => {}
            Some(Value::String(url)) => {
                if !url.is_empty() && !is_valid_promptbook_url(url) {
                    issues.push(format!("promptbookUrl \"{}\" is not a valid http(s) URL", url));
                }
            }
            Some(_) => issues.push("promptbookUrl must be a string".to_string()),
        }

        if let Some(title) = object.get("title") {
            if !title.is_string() {
                issues.push("title must be a string".to_string());
            }
        }

        for key in ["parameters", "promptTemplates"] {
            if let Some(field) = object.get(key) {
                if !field.is_array() {
                    issues.push(format!("{} must be an array", key));
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

fn is_valid_promptbook_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) => !rest.is_empty() && !url.chars().any(char::is_whitespace),
        None => false,
    }
}

/// Accepts everything. Useful when definitions were validated upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopValidator;

impl PromptbookValidator for NoopValidator {
    fn validate(&self, _promptbook: &PromptbookJson) -> Result<(), ValidationError> {
        Ok(())
    }
}
