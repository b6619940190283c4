use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::core::conversion::{
    JsonSourceConverter, PromptbookConverter, PromptbookValidator, StructuralValidator,
};
use crate::core::error::{LibraryError, NotFoundError, Result};
use crate::core::prompt::Prompt;
use crate::core::promptbook::{PromptbookJson, PromptbookSource, PromptbookUrl};
use crate::core::settings::ExecutorSettings;

use super::PromptbookLibrary;

/// What to do when two sources define the same promptbook URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later source replaces the earlier one (it keeps the earlier position).
    #[default]
    Overwrite,
    /// Construction fails with [`LibraryError::DuplicateUrl`].
    Reject,
}

/// Immutable, URL-keyed store of promptbooks.
///
/// Built once, then only read. Shared references can be handed to any number
/// of threads or tasks.
pub struct PromptbookRegistry {
    promptbooks: HashMap<PromptbookUrl, Arc<PromptbookJson>>,
    order: Vec<PromptbookUrl>,
    settings: Option<ExecutorSettings>,
}

impl PromptbookRegistry {
    /// Builds a registry from named sources with the default converter and
    /// validator, overwriting on duplicate URLs.
    ///
    /// Sources are processed in iteration order and construction stops at the
    /// first entry that fails to convert, validate, or carry a URL. Names are
    /// only used in error messages; the key is always the promptbook's own URL.
    pub fn from_sources<I, N, S>(sources: I, settings: Option<ExecutorSettings>) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<PromptbookSource>,
    {
        let builder = RegistryBuilder::new();
        match settings {
            Some(settings) => builder.settings(settings).build(sources),
            None => builder.build(sources),
        }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.promptbooks.contains_key(url)
    }

    /// Executor settings attached at construction, passed through untouched.
    pub fn settings(&self) -> Option<&ExecutorSettings> {
        self.settings.as_ref()
    }
}

impl PromptbookLibrary for PromptbookRegistry {
    fn list_promptbooks(&self) -> Vec<PromptbookUrl> {
        self.order.clone()
    }

    fn get_promptbook_by_url(
        &self,
        url: &str,
    ) -> std::result::Result<Arc<PromptbookJson>, NotFoundError> {
        self.promptbooks.get(url).cloned().ok_or_else(|| NotFoundError {
            url: url.to_string(),
            available: self.list_promptbooks(),
        })
    }

    /// Always `true` for now.
    ///
    /// Known limitation: the prompt is not yet matched against the templates
    /// of the registered promptbooks, so every library claims every prompt.
    fn is_responsible_for_prompt(&self, _prompt: &Prompt) -> bool {
        true
    }
}

impl fmt::Debug for PromptbookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptbookRegistry")
            .field("promptbooks", &self.order)
            .field("settings", &self.settings)
            .finish()
    }
}

/// Assembles a [`PromptbookRegistry`] with explicitly chosen collaborators.
pub struct RegistryBuilder {
    converter: Box<dyn PromptbookConverter>,
    validator: Box<dyn PromptbookValidator>,
    settings: Option<ExecutorSettings>,
    duplicate_policy: DuplicatePolicy,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            converter: Box::new(JsonSourceConverter),
            validator: Box::new(StructuralValidator),
            settings: None,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    pub fn converter<C: PromptbookConverter + 'static>(mut self, converter: C) -> Self {
        self.converter = Box::new(converter);
        self
    }

    pub fn validator<V: PromptbookValidator + 'static>(mut self, validator: V) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn settings(mut self, settings: ExecutorSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn build<I, N, S>(self, sources: I) -> Result<PromptbookRegistry>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<PromptbookSource>,
    {
        let mut promptbooks: HashMap<PromptbookUrl, Arc<PromptbookJson>> = HashMap::new();
        let mut order = Vec::new();
        // url -> name of the source that defined it
        let mut defined_by: HashMap<PromptbookUrl, String> = HashMap::new();

        for (name, source) in sources {
            let name = name.into();
            let promptbook = match source.into() {
                PromptbookSource::Text(text) => self.converter.convert(&text)?,
                PromptbookSource::Json(json) => json,
            };
            self.validator.validate(&promptbook)?;

            let url = promptbook
                .promptbook_url()
                .ok_or_else(|| LibraryError::MissingIdentity { name: name.clone() })?
                .to_string();

            if let Some(previous) = defined_by.get(&url) {
                match self.duplicate_policy {
                    DuplicatePolicy::Reject => {
                        return Err(LibraryError::DuplicateUrl {
                            url,
                            first: previous.clone(),
                            second: name,
                        });
                    }
                    DuplicatePolicy::Overwrite => {
                        log::warn!(
                            "Promptbook \"{}\" overwrites \"{}\" at url {}",
                            name,
                            previous,
                            url
                        );
                    }
                }
            } else {
                order.push(url.clone());
            }

            log::debug!("Registered promptbook \"{}\" at {}", name, url);
            defined_by.insert(url.clone(), name);
            promptbooks.insert(url, Arc::new(promptbook));
        }

        log::info!("Built promptbook registry with {} promptbooks", order.len());

        Ok(PromptbookRegistry {
            promptbooks,
            order,
            settings: self.settings,
        })
    }
}
