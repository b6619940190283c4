use thiserror::Error;

/// Raised by a [`PromptbookConverter`](super::conversion::PromptbookConverter)
/// when textual content does not form a well-formed definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Promptbook conversion error: {message}")]
pub struct ConversionError {
    pub message: String,
}

impl ConversionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raised by a [`PromptbookValidator`](super::conversion::PromptbookValidator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Promptbook validation error: {}", .issues.join("; "))]
pub struct ValidationError {
    pub issues: Vec<String>,
}

impl ValidationError {
    pub fn new(issue: impl Into<String>) -> Self {
        Self {
            issues: vec![issue.into()],
        }
    }
}

/// A lookup by URL did not hit anything in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_not_found(.url, .available))]
pub struct NotFoundError {
    pub url: String,
    pub available: Vec<String>,
}

fn render_not_found(url: &str, available: &[String]) -> String {
    let mut message = format!(
        "Promptbook with url \"{}\" not found\n\nAvailable promptbooks:",
        url
    );
    if available.is_empty() {
        message.push_str("\n(none)");
    }
    for url in available {
        message.push_str("\n- ");
        message.push_str(url);
    }
    message
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "Promptbook with name \"{name}\" does not have defined URL. \
         Promptbooks without URLs are anonymous: they can be used standalone, \
         but cannot be referenced by other promptbooks or placed in a library"
    )]
    MissingIdentity { name: String },

    #[error("Promptbook URL \"{url}\" is defined by both \"{first}\" and \"{second}\"")]
    DuplicateUrl {
        url: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
