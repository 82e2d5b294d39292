//! Per-invocation switch session.
//!
//! Replaces what would otherwise be process globals with an explicit state
//! object: the output-config handshake file for the shell wrapper, the
//! context that was active when the session opened, and an on-disk record of
//! the previous context so the `-` sentinel works across invocations. The
//! record lives in a hidden file inside the config directory, which the
//! directory scan skips by construction.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::kubeconfig::{self, KubeConfig};

/// Fallback handshake file when `--output-config` is not given.
pub const DEFAULT_OUTPUT_CONFIG: &str = "/tmp/kjx-config";

/// File name of the previous-context record inside the config directory.
const PREVIOUS_CONTEXT_FILE: &str = ".kjx-previous";

#[derive(Debug)]
pub struct Session {
    output_path: PathBuf,
    state_path: PathBuf,
    current_context: Option<String>,
    previous_context: Option<String>,
}

impl Session {
    /// Opens a session: resolves the output handshake path and loads the
    /// current and previous context names. Both loads are best-effort; a
    /// missing or unreadable active config simply means "no current context".
    pub fn open(config_dir: &Path, output_config: Option<PathBuf>) -> Session {
        let current_context = kubeconfig::active_config_path()
            .ok()
            .and_then(|path| KubeConfig::load(&path).ok())
            .map(|config| config.current_context)
            .filter(|name| !name.is_empty());

        let state_path = config_dir.join(PREVIOUS_CONTEXT_FILE);
        let previous_context = fs::read_to_string(&state_path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|name| !name.is_empty());

        Session {
            output_path: output_config.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_CONFIG)),
            state_path,
            current_context,
            previous_context,
        }
    }

    /// The context that was active when the session opened, if any.
    pub fn current_context(&self) -> Option<&str> {
        self.current_context.as_deref()
    }

    /// Resolves a requested context name, mapping the `-` sentinel to the
    /// recorded previous context.
    pub fn resolve_target(&self, raw: &str) -> Result<String> {
        if raw != "-" {
            return Ok(raw.to_string());
        }
        self.previous_context
            .clone()
            .ok_or(Error::NoPreviousContext)
    }

    /// Records a completed switch: writes the selected config path to the
    /// handshake file, persists the outgoing context as "previous", and
    /// points `KUBECONFIG` at the file for this process and its children.
    /// Shell-level propagation needs the shell wrapper.
    pub fn record_switch(&mut self, config_path: &Path, context_name: &str) -> Result<()> {
        fs::write(&self.output_path, config_path.display().to_string())
            .map_err(|e| Error::io(&self.output_path, e))?;

        if let Some(outgoing) = self.current_context.take() {
            fs::write(&self.state_path, &outgoing).map_err(|e| Error::io(&self.state_path, e))?;
            self.previous_context = Some(outgoing);
        }
        self.current_context = Some(context_name.to_string());

        env::set_var("KUBECONFIG", config_path);
        Ok(())
    }
}
