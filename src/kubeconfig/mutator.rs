//! In-place edits of kubeconfig documents.
//!
//! Edits operate on the generic tree model so every field the typed model
//! does not know about survives the rewrite. Each operation reads the target
//! file fresh from disk, mutates the tree, and rewrites the whole file.
//! There is no atomic rename: a crash mid-write can corrupt the target.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::tree::{self, Node};

/// Outcome of a namespace edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceOutcome {
    /// The named context was found and its namespace was set.
    Updated,
    /// No context with the given name exists in the file. The file was left
    /// untouched; callers decide how loudly to report this.
    ContextNotFound,
}

fn read_tree(path: &Path) -> Result<Node> {
    let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    tree::from_yaml(&data).map_err(|e| Error::parse(path, e))
}

fn write_tree(path: &Path, root: &Node) -> Result<()> {
    let data = tree::to_yaml(root).map_err(|e| Error::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, data).map_err(|e| Error::io(path, e))
}

/// Sets the top-level `current-context` field, adding or overwriting it.
///
/// The context name is trusted as-is: callers validate that the context is
/// declared in the file before asking for the switch.
pub fn set_current_context(path: &Path, context_name: &str) -> Result<()> {
    let mut root = read_tree(path)?;

    let map = root
        .as_mapping_mut()
        .ok_or_else(|| Error::shape(path, "a mapping at the document root"))?;
    map.set("current-context", Node::from(context_name));

    write_tree(path, &root)
}

/// Sets `namespace` inside the context entry named `context_name`.
///
/// Returns [`NamespaceOutcome::ContextNotFound`] without touching the file
/// when no entry matches; a document whose `contexts` list has an unexpected
/// shape is an error rather than a silent no-op.
pub fn set_namespace(path: &Path, namespace: &str, context_name: &str) -> Result<NamespaceOutcome> {
    let mut root = read_tree(path)?;

    let map = root
        .as_mapping_mut()
        .ok_or_else(|| Error::shape(path, "a mapping at the document root"))?;
    let contexts = match map.get_mut("contexts") {
        Some(node) => node
            .as_sequence_mut()
            .ok_or_else(|| Error::shape(path, "a sequence under 'contexts'"))?,
        None => return Ok(NamespaceOutcome::ContextNotFound),
    };

    let mut updated = false;
    for entry in contexts.iter_mut() {
        let Some(entry) = entry.as_mapping_mut() else {
            return Err(Error::shape(path, "a mapping per contexts entry"));
        };
        if entry.get_str("name") != Some(context_name) {
            continue;
        }

        let detail = entry
            .get_mut("context")
            .and_then(Node::as_mapping_mut)
            .ok_or_else(|| Error::shape(path, "a 'context' mapping inside the entry"))?;
        detail.set("namespace", Node::from(namespace));
        updated = true;
        break;
    }

    if !updated {
        return Ok(NamespaceOutcome::ContextNotFound);
    }

    write_tree(path, &root)?;
    Ok(NamespaceOutcome::Updated)
}
