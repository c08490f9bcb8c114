//! JSON resource tree
//!
//! A node is a JSON object. Scalar members are its properties, object members
//! are its children. Namespaced properties (`jcr:`, `sling:`) are storage
//! metadata; films are built from named properties only, so they never leak
//! into a film. Children are never filtered by name.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

/// Property naming the resource type of a node
pub const RESOURCE_TYPE_KEY: &str = "sling:resourceType";

/// An immutable resource tree rooted at a single JSON object
#[derive(Debug, Clone)]
pub struct ResourceTree {
    root: Value,
}

impl ResourceTree {
    /// Wraps an already parsed document
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parses a tree from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Reads and parses a tree from a file
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Returns the root node
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolves a `/`-separated path to a node.
    ///
    /// Empty segments are ignored, so `""`, `"/"` and `"//"` all name the root.
    /// Returns `None` when any segment is missing or is not a node.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        let mut node = self.root.as_object().map(|_| &self.root)?;

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = node.get(segment).filter(|child| child.is_object())?;
        }

        Some(node)
    }

    /// Returns the resource type of a node, if set
    pub fn resource_type(node: &Value) -> Option<&str> {
        node.get(RESOURCE_TYPE_KEY).and_then(Value::as_str)
    }

    /// Iterates every child node of a node in document order
    pub fn children(node: &Value) -> impl Iterator<Item = (&str, &Value)> {
        node.as_object()
            .into_iter()
            .flat_map(|map| map.iter())
            .filter(|(_, value)| value.is_object())
            .map(|(key, value)| (key.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> ResourceTree {
        ResourceTree::new(json!({
            "jcr:primaryType": "nt:unstructured",
            "content": {
                "oscars": {
                    "sling:resourceType": "test/filmEntryContainer",
                    "b": {"title": "B"},
                    "a": {"title": "A"},
                    "count": 2
                }
            }
        }))
    }

    #[test]
    fn test_resolve_root_variants() {
        let tree = tree();
        assert!(tree.resolve("").is_some());
        assert!(tree.resolve("/").is_some());
        assert_eq!(tree.resolve("//"), Some(tree.root()));
    }

    #[test]
    fn test_resolve_nested() {
        let tree = tree();
        let node = tree.resolve("/content/oscars").unwrap();
        assert_eq!(
            ResourceTree::resource_type(node),
            Some("test/filmEntryContainer")
        );
    }

    #[test]
    fn test_resolve_missing_or_scalar() {
        let tree = tree();
        assert!(tree.resolve("/content/missing").is_none());
        assert!(tree.resolve("/content/oscars/count").is_none());
    }

    #[test]
    fn test_children_keep_document_order() {
        let tree = tree();
        let node = tree.resolve("content/oscars").unwrap();
        let names: Vec<&str> = ResourceTree::children(node).map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_namespaced_children_are_kept() {
        let tree = ResourceTree::new(json!({
            "jcr:primaryType": "nt:unstructured",
            "film:1": {"title": "A"},
            "jcr:content": {"jcr:primaryType": "nt:resource"}
        }));
        let names: Vec<&str> = ResourceTree::children(tree.root()).map(|(k, _)| k).collect();
        assert_eq!(names, vec!["film:1", "jcr:content"]);
    }
}
