//! Tests for in-place kubeconfig edits.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;

    use crate::error::Error;
    use crate::kubeconfig::{set_current_context, set_namespace, NamespaceOutcome};
    use crate::tree::{self, Node};

    const DOC: &str = r#"apiVersion: v1
kind: Config
preferences:
  colors: true
x-unknown-extension:
  keep: me
clusters:
- name: east
  cluster:
    server: https://east.example.com
contexts:
- name: a
  context:
    cluster: east
    user: alice
    namespace: x
- name: b
  context:
    cluster: east
    user: bob
current-context: a
users:
- name: alice
  user:
    token: secret
"#;

    fn fixture() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, DOC).unwrap();
        (dir, path)
    }

    fn parse(path: &PathBuf) -> Node {
        tree::from_yaml(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_set_current_context_round_trip() {
        let (_dir, path) = fixture();
        let before = tree::from_yaml(DOC).unwrap();

        set_current_context(&path, "b").unwrap();

        let after = parse(&path);
        let after_map = after.as_mapping().unwrap();
        assert_eq!(after_map.get_str("current-context"), Some("b"));

        // Every other top-level key is untouched.
        for (key, value) in before.as_mapping().unwrap().iter() {
            if key == "current-context" {
                continue;
            }
            assert_eq!(after_map.get(key), Some(value), "key '{}' changed", key);
        }
        assert_eq!(after_map.len(), before.as_mapping().unwrap().len());
    }

    #[test]
    fn test_set_current_context_adds_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "apiVersion: v1\nkind: Config\n").unwrap();

        set_current_context(&path, "fresh").unwrap();

        let after = parse(&path);
        assert_eq!(
            after.as_mapping().unwrap().get_str("current-context"),
            Some("fresh")
        );
    }

    #[test]
    fn test_set_current_context_rejects_non_mapping_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "- just\n- a\n- list\n").unwrap();

        match set_current_context(&path, "x") {
            Err(Error::Shape { .. }) => {}
            other => panic!("expected Shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_set_namespace_updates_only_target_context() {
        let (_dir, path) = fixture();

        assert_eq!(set_namespace(&path, "y", "a").unwrap(), NamespaceOutcome::Updated);

        let after = parse(&path);
        let contexts = after
            .as_mapping()
            .unwrap()
            .get("contexts")
            .unwrap()
            .as_sequence()
            .unwrap();

        let a = contexts[0].as_mapping().unwrap();
        let a_detail = a.get("context").unwrap().as_mapping().unwrap();
        assert_eq!(a_detail.get_str("namespace"), Some("y"));
        assert_eq!(a_detail.get_str("cluster"), Some("east"));
        assert_eq!(a_detail.get_str("user"), Some("alice"));

        // The sibling context keeps no namespace at all.
        let b = contexts[1].as_mapping().unwrap();
        let b_detail = b.get("context").unwrap().as_mapping().unwrap();
        assert!(!b_detail.has("namespace"));
    }

    #[test]
    fn test_set_namespace_missing_context_leaves_file_untouched() {
        let (_dir, path) = fixture();

        assert_eq!(
            set_namespace(&path, "y", "missing").unwrap(),
            NamespaceOutcome::ContextNotFound
        );

        assert_eq!(fs::read_to_string(&path).unwrap(), DOC);
    }

    #[test]
    fn test_set_namespace_adds_field_when_absent() {
        let (_dir, path) = fixture();

        assert_eq!(set_namespace(&path, "web", "b").unwrap(), NamespaceOutcome::Updated);

        let after = parse(&path);
        let contexts = after
            .as_mapping()
            .unwrap()
            .get("contexts")
            .unwrap()
            .as_sequence()
            .unwrap();
        let b_detail = contexts[1]
            .as_mapping()
            .unwrap()
            .get("context")
            .unwrap()
            .as_mapping()
            .unwrap();
        assert_eq!(b_detail.get_str("namespace"), Some("web"));
    }

    #[test]
    fn test_set_namespace_bad_contexts_shape_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "contexts: not-a-list\n").unwrap();

        match set_namespace(&path, "y", "a") {
            Err(Error::Shape { .. }) => {}
            other => panic!("expected Shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");

        match set_current_context(&path, "x") {
            Err(Error::Io { .. }) => {}
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
