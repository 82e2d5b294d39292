//! # kjx
//!
//! Jump across contexts and namespaces spread over multiple kubeconfig files.
//!
//! This library holds the testable core behind the `kjx` binary: discovering
//! kubeconfig files in a directory, classifying production environments,
//! searching context and namespace names, and editing kubeconfig documents
//! in place without disturbing fields it does not understand.
//!
//! ## Modules
//!
//! - [`classify`] - Production-environment keyword heuristic
//! - [`kubeconfig`] - Typed read model, directory discovery, in-place edits
//! - [`kubectl`] - Live namespace listing through the kubectl CLI
//! - [`search`] - Case-insensitive substring search over name lists
//! - [`session`] - Per-invocation switch state and the shell handshake file
//! - [`shell`] - Shell wrapper function and profile installation
//! - [`tree`] - Order-preserving dynamic YAML document model

pub mod classify;
pub mod error;
pub mod kubeconfig;
pub mod kubectl;
pub mod search;
pub mod session;
pub mod shell;
pub mod tree;

pub use error::{Error, Result};
pub use kubeconfig::{ConfigEntry, KubeConfig, LoadedConfigs, NamespaceOutcome};
pub use session::Session;
pub use tree::Node;
