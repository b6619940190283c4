//! Messages exchanged with a remote prompt-execution server.
//!
//! Only the client-to-server request lives here. The transport, and the
//! progress messages the server streams back, belong to the layer above.

pub mod error;
pub mod request;

pub use error::RemoteError;
pub use request::{ClientId, RemoteExecutionRequest};
