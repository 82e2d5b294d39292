//! Dynamic node types and operations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Node represents a YAML value that can be any of the supported types.
///
/// Unlike a typed model, a Node tree preserves every field it is given,
/// so a parse/edit/serialize cycle only changes what was edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Node>),
    Mapping(Mapping),
}

/// Mapping is a string-keyed map that keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: IndexMap<String, Node>,
}

impl Node {
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Node::Mapping(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl Mapping {
    pub fn new() -> Self {
        Mapping {
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    /// Sets a key, overwriting in place if it exists and appending otherwise.
    pub fn set(&mut self, key: impl Into<String>, value: Node) {
        self.entries.insert(key.into(), value);
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.entries.iter()
    }

    /// Returns the string value of a key, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Node::as_str)
    }
}

/// Parse a node tree from YAML.
pub fn from_yaml(yaml: &str) -> Result<Node, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Serialize a node tree to YAML.
pub fn to_yaml(node: &Node) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_node_types() {
        assert!(Node::Null.is_null());
        assert!(Node::Mapping(Mapping::new()).is_mapping());
        assert!(Node::Sequence(vec![]).is_sequence());
        assert_eq!(Node::from("x").as_str(), Some("x"));
        assert_eq!(Node::Int(1).as_str(), None);
        assert!(Node::Bool(true).as_mapping().is_none());
    }

    #[test]
    fn test_mapping_operations() {
        let mut map = Mapping::new();
        assert!(map.is_empty());

        map.set("key", Node::from("value"));
        assert!(map.has("key"));
        assert_eq!(map.get_str("key"), Some("value"));

        map.set("key", Node::from("other"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_str("key"), Some("other"));
    }

    #[test]
    fn test_yaml_preserves_key_order() {
        let yaml = "zeta: 1\nalpha: 2\nmiddle:\n  b: true\n  a: false\n";
        let node = from_yaml(yaml).unwrap();
        let out = to_yaml(&node).unwrap();

        let zeta = out.find("zeta").unwrap();
        let alpha = out.find("alpha").unwrap();
        assert!(zeta < alpha, "key order not preserved:\n{}", out);

        let reparsed = from_yaml(&out).unwrap();
        assert_eq!(node, reparsed);
    }

    #[test]
    fn test_yaml_preserves_unknown_fields() {
        let yaml = r#"
apiVersion: v1
kind: Config
x-custom-extension:
  nested:
    - 1
    - 2.5
    - plain
current-context: dev
"#;
        let mut node = from_yaml(yaml).unwrap();
        let map = node.as_mapping_mut().unwrap();
        map.set("current-context", Node::from("prod"));

        let reparsed = from_yaml(&to_yaml(&node).unwrap()).unwrap();
        let map = reparsed.as_mapping().unwrap();
        assert_eq!(map.get_str("current-context"), Some("prod"));
        assert!(map.get("x-custom-extension").unwrap().is_mapping());
        assert_eq!(map.get_str("kind"), Some("Config"));
    }

    #[test]
    fn test_scalar_round_trip() {
        let yaml = "ints: 42\nfloats: 3.5\nbools: true\nnulls: null\n";
        let node = from_yaml(yaml).unwrap();
        let map = node.as_mapping().unwrap();
        assert_eq!(map.get("ints"), Some(&Node::Int(42)));
        assert_eq!(map.get("floats"), Some(&Node::Float(3.5)));
        assert_eq!(map.get("bools"), Some(&Node::Bool(true)));
        assert_eq!(map.get("nulls"), Some(&Node::Null));
    }
}
