use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::core::prompt::Prompt;
use crate::remote::error::RemoteError;

/// Opaque identity of the client that sent a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random id for clients that do not bring their own.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ClientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Sent from client to server over a persistent channel to ask the server to
/// execute one prompt. The server answers with progress messages addressed
/// to the same client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteExecutionRequest {
    /// Client responsible for the request
    pub client_id: ClientId,
    /// The prompt to execute
    pub prompt: Prompt,
}

impl RemoteExecutionRequest {
    pub fn new(client_id: impl Into<ClientId>, prompt: Prompt) -> Self {
        Self {
            client_id: client_id.into(),
            prompt,
        }
    }

    pub fn to_json(&self) -> Result<String, RemoteError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_value(&self) -> Result<Value, RemoteError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, RemoteError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_value(value: Value) -> Result<Self, RemoteError> {
        Ok(serde_json::from_value(value)?)
    }
}
