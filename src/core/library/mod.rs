pub mod registry;

use std::sync::Arc;

use crate::core::error::NotFoundError;
use crate::core::prompt::Prompt;
use crate::core::promptbook::{PromptbookJson, PromptbookUrl};

/// A collection of promptbooks that belong together in one application.
pub trait PromptbookLibrary: Send + Sync {
    /// URLs of every promptbook in the library, in registration order.
    fn list_promptbooks(&self) -> Vec<PromptbookUrl>;

    /// Looks a promptbook up by its URL.
    ///
    /// This is a lookup in the library, never a fetch of the URL itself.
    fn get_promptbook_by_url(&self, url: &str) -> Result<Arc<PromptbookJson>, NotFoundError>;

    /// Whether the given prompt was defined by a promptbook in this library.
    fn is_responsible_for_prompt(&self, prompt: &Prompt) -> bool;
}
