//! Live namespace listing via the kubectl CLI.
//!
//! The cluster is only ever consulted through `kubectl get namespaces`; its
//! line-oriented output is the whole interface. Blocking, no timeout: a hung
//! kubectl hangs the invocation.

use std::process::Command;

use crate::error::{Error, Result};

/// Runs `kubectl get namespaces -o name --no-headers` against the currently
/// active config and returns the namespace names, sorted.
pub fn live_namespaces() -> Result<Vec<String>> {
    let output = Command::new("kubectl")
        .args(["get", "namespaces", "-o", "name", "--no-headers"])
        .output()
        .map_err(|e| Error::Kubectl(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Kubectl(stderr.trim().to_string()));
    }

    Ok(parse_namespace_lines(&String::from_utf8_lossy(
        &output.stdout,
    )))
}

/// Parses `namespace/<name>` lines into sorted namespace names.
pub fn parse_namespace_lines(output: &str) -> Vec<String> {
    let mut namespaces: Vec<String> = output
        .lines()
        .filter_map(|line| {
            let name = line.trim().strip_prefix("namespace/").unwrap_or(line.trim());
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            }
        })
        .collect();

    namespaces.sort();
    namespaces
}
