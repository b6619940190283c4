use serde::{Deserialize, Serialize};

/// Partial configuration for the executors built from a library.
///
/// The registry only carries these around; nothing in this crate reads them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExecutorSettings {
    /// How many times a failing prompt template may be retried
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_execution_attempts: Option<u32>,
    /// Whether executors should log every step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verbose: Option<bool>,
}

impl ExecutorSettings {
    pub fn with_max_execution_attempts(mut self, attempts: u32) -> Self {
        self.max_execution_attempts = Some(attempts);
        self
    }

    pub fn verbose(mut self, is_verbose: bool) -> Self {
        self.is_verbose = Some(is_verbose);
        self
    }
}
