//! File System Types
//!
//! Core node types for the read-only virtual file system.

use indexmap::IndexMap;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("EINVAL: invalid name '{name}'")]
    InvalidName { name: String },

    #[error("ENOTDIR: not a directory, {operation} '{path}'")]
    NotDirectory { path: String, operation: String },

    #[error("EISDIR: illegal operation on a directory, {operation} '{path}'")]
    IsDirectory { path: String, operation: String },

    #[error("ENOENT: no such node, {operation} #{id}")]
    UnknownNode { id: usize, operation: String },
}

/// Index of a node inside the arena owned by [`super::Vfs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Node payload: either a file with text content or a folder with
/// insertion-ordered children keyed by name.
#[derive(Debug, Clone)]
pub enum NodeKind {
    File { content: String },
    Folder { children: IndexMap<String, NodeId> },
}

/// A single file system item.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Non-owning back-reference, only used to compute paths.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Check if node is a file
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// Check if node is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// File content, or `None` for folders.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Folder children, or `None` for files.
    pub fn children(&self) -> Option<&IndexMap<String, NodeId>> {
        match &self.kind {
            NodeKind::Folder { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }
}

/// Names must be non-empty and must not contain the path separator.
pub fn validate_name(name: &str) -> Result<(), VfsError> {
    if name.is_empty() || name.contains('/') {
        return Err(VfsError::InvalidName { name: name.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("jobs").is_ok());
        assert!(validate_name("lockheed.txt").is_ok());
        assert_eq!(
            validate_name(""),
            Err(VfsError::InvalidName { name: String::new() })
        );
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("/").is_err());
    }

    #[test]
    fn test_node_methods() {
        let file = Node {
            name: "a.txt".to_string(),
            parent: None,
            kind: NodeKind::File { content: "hi".to_string() },
        };
        assert!(file.is_file());
        assert!(!file.is_directory());
        assert_eq!(file.content(), Some("hi"));
        assert!(file.children().is_none());

        let dir = Node {
            name: "docs".to_string(),
            parent: Some(NodeId(0)),
            kind: NodeKind::Folder { children: IndexMap::new() },
        };
        assert!(dir.is_directory());
        assert_eq!(dir.content(), None);
        assert_eq!(dir.parent(), Some(NodeId(0)));
        assert_eq!(dir.children().map(|c| c.len()), Some(0));
    }

    #[test]
    fn test_error_messages() {
        let err = VfsError::NotDirectory {
            path: "/jobs/bayer.txt".to_string(),
            operation: "add_child".to_string(),
        };
        assert_eq!(err.to_string(), "ENOTDIR: not a directory, add_child '/jobs/bayer.txt'");
    }
}
