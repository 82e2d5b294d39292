//! Kubeconfig module - typed reading, directory discovery, and in-place edits.
//!
//! A kubeconfig file is handled through two parallel views: a typed read
//! model ([`KubeConfig`]) for decision logic, and a generic tree
//! ([`crate::tree::Node`]) for writes, so edits never drop fields the typed
//! model does not know about. The mutator re-reads the file from disk
//! immediately before editing rather than reusing an earlier parse.

mod model;
mod mutator;
mod repository;

#[cfg(test)]
mod mutator_test;

pub use model::*;
pub use mutator::*;
pub use repository::*;

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Default directory scanned for kubeconfig files: `~/.kube/configs`.
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kube")
        .join("configs")
}

/// Path of the currently active kubeconfig: `$KUBECONFIG` if set, otherwise
/// `~/.kube/config`.
pub fn active_config_path() -> Result<PathBuf> {
    match env::var_os("KUBECONFIG") {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => {
            let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
            Ok(home.join(".kube").join("config"))
        }
    }
}
