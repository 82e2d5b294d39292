//! Tree module - Order-preserving in-memory representation of YAML documents.
//!
//! This is the write-side view of a kubeconfig file: a generic tree that
//! round-trips unknown fields and key order intact, so edits never drop
//! content the typed read model does not understand.

mod node;

pub use node::*;
