//! Typed read model for kubeconfig documents.
//!
//! Deserialize-only: decision logic reads through these structs, but writes
//! go through the generic tree so unknown fields survive round-trips.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// The subset of a kubeconfig document the tool consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KubeConfig {
    #[serde(rename = "apiVersion", default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub clusters: Vec<NamedCluster>,
    #[serde(default)]
    pub contexts: Vec<NamedContext>,
    #[serde(rename = "current-context", default)]
    pub current_context: String,
    #[serde(default)]
    pub users: Vec<NamedUser>,
}

/// A named context entry: (cluster, user, namespace) selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedContext {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub context: ContextDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContextDetail {
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedCluster {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cluster: ClusterDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterDetail {
    #[serde(default)]
    pub server: String,
    #[serde(rename = "certificate-authority", default)]
    pub certificate_authority: Option<String>,
    #[serde(rename = "certificate-authority-data", default)]
    pub certificate_authority_data: Option<String>,
    #[serde(rename = "insecure-skip-tls-verify", default)]
    pub insecure_skip_tls_verify: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedUser {
    #[serde(default)]
    pub name: String,
}

impl KubeConfig {
    /// Loads and parses a kubeconfig file.
    pub fn load(path: &Path) -> Result<KubeConfig> {
        let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_yaml::from_str(&data).map_err(|e| Error::parse(path, e))
    }

    /// Names of every context declared in the document, in file order.
    pub fn context_names(&self) -> Vec<String> {
        self.contexts.iter().map(|c| c.name.clone()).collect()
    }

    /// Finds a context entry by name.
    pub fn find_context(&self, name: &str) -> Option<&NamedContext> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Namespace of the current context, defaulting to "default".
    pub fn current_namespace(&self) -> &str {
        self.find_context(&self.current_context)
            .and_then(|c| c.context.namespace.as_deref())
            .unwrap_or("default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: east
  cluster:
    server: https://east.example.com
    certificate-authority-data: Zm9v
contexts:
- name: dev-east
  context:
    cluster: east
    user: alice
    namespace: web
- name: prod-east
  context:
    cluster: east
    user: alice
current-context: dev-east
users:
- name: alice
  user:
    token: secret
"#;

    #[test]
    fn test_parse_sample() {
        let config: KubeConfig = serde_yaml::from_str(SAMPLE).unwrap();
        assert_eq!(config.api_version, "v1");
        assert_eq!(config.kind, "Config");
        assert_eq!(config.context_names(), vec!["dev-east", "prod-east"]);
        assert_eq!(config.current_context, "dev-east");
        assert_eq!(config.clusters[0].cluster.server, "https://east.example.com");
        assert_eq!(config.users[0].name, "alice");
    }

    #[test]
    fn test_current_namespace_default() {
        let mut config: KubeConfig = serde_yaml::from_str(SAMPLE).unwrap();
        assert_eq!(config.current_namespace(), "web");

        config.current_context = "prod-east".to_string();
        assert_eq!(config.current_namespace(), "default");

        config.current_context = "missing".to_string();
        assert_eq!(config.current_namespace(), "default");
    }
}
