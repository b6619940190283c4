//! # promptbook-registry
//!
//! An immutable, URL-keyed library of promptbook definitions, plus the wire
//! contract a client uses to ask a remote server to execute a prompt.
//!
//! ## Features
//!
//! - **Build once, read everywhere**: a registry is validated and populated at
//!   construction and never mutated afterwards, so it can be shared freely
//!   between threads and tasks
//! - **Injected collaborators**: converters and validators are strategies you
//!   hand to the builder, not globals
//! - **Explicit duplicate policy**: overwrite (the default) or reject
//! - **Transport-agnostic requests**: [`RemoteExecutionRequest`] serializes
//!   losslessly to JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use promptbook_registry::prelude::*;
//! use serde_json::json;
//!
//! let registry = PromptbookRegistry::from_sources(
//!     vec![
//!         ("a", PromptbookSource::from(json!({ "promptbookUrl": "https://x/a" }))),
//!         ("b", PromptbookSource::from(r#"{ "promptbookUrl": "https://x/b" }"#)),
//!     ],
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(registry.list_promptbooks(), vec!["https://x/a", "https://x/b"]);
//! assert!(registry.get_promptbook_by_url("https://x/c").is_err());
//! ```
//!
//! ## Module Organization
//!
//! - [`prelude`]: Commonly used types and traits (import with `use promptbook_registry::prelude::*`)
//! - [`remote`]: The client-to-server execution request

// ============================================================================
// Core Module
// ============================================================================

mod core;

// ============================================================================
// Public Re-exports - Granular Imports
// ============================================================================

// Promptbook data model
pub use core::prompt::{ModelRequirements, ModelVariant, Prompt};
pub use core::promptbook::{PromptbookJson, PromptbookSource, PromptbookString, PromptbookUrl};
pub use core::settings::ExecutorSettings;

// Collaborators
pub use core::conversion::{
    JsonSourceConverter, NoopValidator, PromptbookConverter, PromptbookValidator,
    StructuralValidator,
};

// Library
pub use core::library::registry::{DuplicatePolicy, PromptbookRegistry, RegistryBuilder};
pub use core::library::PromptbookLibrary;

// Errors
pub use core::error::{ConversionError, LibraryError, NotFoundError, Result, ValidationError};

// ============================================================================
// Remote Execution
// ============================================================================

pub mod remote;

pub use remote::{ClientId, RemoteError, RemoteExecutionRequest};

// ============================================================================
// Prelude Module - Convenient Bulk Imports
// ============================================================================

/// Imports everything needed to build and query a registry and to send
/// remote execution requests.
///
/// # Example
/// ```rust
/// use promptbook_registry::prelude::*;
/// ```
pub mod prelude {
    pub use super::{
        ClientId,
        DuplicatePolicy,
        ExecutorSettings,
        LibraryError,
        NotFoundError,
        Prompt,
        // Library
        PromptbookJson,
        PromptbookLibrary,
        PromptbookRegistry,
        PromptbookSource,
        RegistryBuilder,
        // Remote
        RemoteExecutionRequest,
    };
}

// ============================================================================
// Re-export commonly used external types for convenience
// ============================================================================

pub use serde_json::Value as JsonValue;

// ============================================================================
// Library Metadata
// ============================================================================

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");
