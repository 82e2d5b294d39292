//! Error taxonomy for kjx operations.

use std::path::PathBuf;
use thiserror::Error;

/// Error represents any failure surfaced by the kjx core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config directory does not exist: {0}")]
    ConfigDirNotFound(PathBuf),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{}: unexpected document shape: expected {expected}", path.display())]
    Shape {
        path: PathBuf,
        expected: &'static str,
    },

    #[error("context '{0}' not found in any config file")]
    ContextNotFound(String),

    #[error("no contexts available")]
    NoContexts,

    #[error("no namespaces found")]
    NoNamespaces,

    #[error("no previous context available")]
    NoPreviousContext,

    #[error("failed to run kubectl: {0}")]
    Kubectl(String),

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("unsupported shell; run 'kjx shell-init' and add the function to your profile manually")]
    UnsupportedShell,
}

impl Error {
    /// Creates an I/O error tagged with the file it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error tagged with the file it concerns.
    pub fn parse(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Error::Parse {
            path: path.into(),
            source,
        }
    }

    /// Creates a shape error for a document that is not structured as expected.
    pub fn shape(path: impl Into<PathBuf>, expected: &'static str) -> Self {
        Error::Shape {
            path: path.into(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
