//! Virtual File System
//!
//! Arena-backed tree of folders and text files. Folders own their children
//! through an insertion-ordered name map; every node keeps a non-owning parent
//! index that is only used to derive paths.

use indexmap::IndexMap;

use super::types::*;

/// Read-only (after construction) virtual file system.
#[derive(Debug, Clone)]
pub struct Vfs {
    nodes: Vec<Node>,
}

impl Vfs {
    /// The root folder, named `/`.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a file system holding only the root folder.
    pub fn new() -> Self {
        let root = Node {
            name: "/".to_string(),
            parent: None,
            kind: NodeKind::Folder { children: IndexMap::new() },
        };
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Number of nodes ever allocated, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Allocate a detached file.
    pub fn create_file(&mut self, name: &str, content: &str) -> Result<NodeId, VfsError> {
        validate_name(name)?;
        Ok(self.alloc(name, NodeKind::File { content: content.to_string() }))
    }

    /// Allocate a detached, empty folder.
    pub fn create_folder(&mut self, name: &str) -> Result<NodeId, VfsError> {
        validate_name(name)?;
        Ok(self.alloc(name, NodeKind::Folder { children: IndexMap::new() }))
    }

    /// Insert `item` into `folder` under its own name, replacing any child of
    /// the same name, and point the item's parent at `folder`.
    ///
    /// No cycle detection is performed: callers must not add a folder beneath
    /// itself.
    pub fn add_child(&mut self, folder: NodeId, item: NodeId) -> Result<(), VfsError> {
        self.require(item, "add_child")?;
        if !self.require(folder, "add_child")?.is_directory() {
            return Err(VfsError::NotDirectory {
                path: self.path(folder).unwrap_or_default(),
                operation: "add_child".to_string(),
            });
        }
        let name = self.nodes[item.0].name.clone();

        // Detach from a previous parent so the item is owned exactly once.
        // Re-adding to the same folder keeps its position.
        if let Some(old_parent) = self.nodes[item.0].parent.filter(|p| *p != folder) {
            if let NodeKind::Folder { children } = &mut self.nodes[old_parent.0].kind {
                if children.get(&name) == Some(&item) {
                    children.shift_remove(&name);
                }
            }
        }

        let displaced = match &mut self.nodes[folder.0].kind {
            NodeKind::Folder { children } => children.insert(name, item),
            NodeKind::File { .. } => None,
        };

        if let Some(old) = displaced.filter(|old| *old != item) {
            self.nodes[old.0].parent = None;
        }
        self.nodes[item.0].parent = Some(folder);
        Ok(())
    }

    /// Create a file and attach it to `folder` in one step.
    pub fn add_file(&mut self, folder: NodeId, name: &str, content: &str) -> Result<NodeId, VfsError> {
        let id = self.create_file(name, content)?;
        self.add_child(folder, id)?;
        Ok(id)
    }

    /// Create a folder and attach it to `folder` in one step.
    pub fn add_folder(&mut self, folder: NodeId, name: &str) -> Result<NodeId, VfsError> {
        let id = self.create_folder(name)?;
        self.add_child(folder, id)?;
        Ok(id)
    }

    /// Replace a file's content.
    pub fn set_content(&mut self, file: NodeId, content: &str) -> Result<(), VfsError> {
        let path = self.path(file).unwrap_or_default();
        match &mut self.require_mut(file, "set_content")?.kind {
            NodeKind::File { content: existing } => {
                *existing = content.to_string();
                Ok(())
            }
            NodeKind::Folder { .. } => Err(VfsError::IsDirectory {
                path,
                operation: "set_content".to_string(),
            }),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn is_directory(&self, id: NodeId) -> bool {
        self.node(id).map_or(false, |n| n.is_directory())
    }

    pub fn content(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.content())
    }

    /// Absolute path, derived by walking parent links up to the root.
    pub fn path(&self, id: NodeId) -> Option<String> {
        let mut node = self.node(id)?;
        if node.parent.is_none() {
            return Some(if node.name == "/" { "/".to_string() } else { format!("/{}", node.name) });
        }

        let mut names = vec![node.name.as_str()];
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            if node.parent.is_some() || node.name != "/" {
                names.push(node.name.as_str());
            }
        }
        names.reverse();
        Some(format!("/{}", names.join("/")))
    }

    /// Content length in characters for files; recursive sum for folders.
    pub fn size(&self, id: NodeId) -> Option<usize> {
        match &self.node(id)?.kind {
            NodeKind::File { content } => Some(content.chars().count()),
            NodeKind::Folder { children } => {
                Some(children.values().filter_map(|c| self.size(*c)).sum())
            }
        }
    }

    /// Exact, case-sensitive lookup of a direct child.
    pub fn child(&self, folder: NodeId, name: &str) -> Option<NodeId> {
        self.node(folder)?.children()?.get(name).copied()
    }

    pub fn has_child(&self, folder: NodeId, name: &str) -> bool {
        self.child(folder, name).is_some()
    }

    /// Direct children in insertion order. Empty for files.
    pub fn children(&self, folder: NodeId) -> Vec<NodeId> {
        self.node(folder)
            .and_then(|n| n.children())
            .map(|c| c.values().copied().collect())
            .unwrap_or_default()
    }

    /// Direct child names in insertion order. Empty for files.
    pub fn child_names(&self, folder: NodeId) -> Vec<&str> {
        self.node(folder)
            .and_then(|n| n.children())
            .map(|c| c.keys().map(|k| k.as_str()).collect())
            .unwrap_or_default()
    }

    /// Resolve a `/`-delimited relative path one segment at a time.
    ///
    /// Empty segments are skipped, so the empty path (or `/`) resolves to
    /// `from` itself. Descending through a file yields `None`.
    pub fn find_child(&self, from: NodeId, path: &str) -> Option<NodeId> {
        self.node(from)?;
        path.split('/')
            .filter(|part| !part.is_empty())
            .try_fold(from, |current, part| self.child(current, part))
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn alloc(&mut self, name: &str, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { name: name.to_string(), parent: None, kind });
        id
    }

    fn require(&self, id: NodeId, operation: &str) -> Result<&Node, VfsError> {
        self.nodes.get(id.0).ok_or_else(|| VfsError::UnknownNode {
            id: id.0,
            operation: operation.to_string(),
        })
    }

    fn require_mut(&mut self, id: NodeId, operation: &str) -> Result<&mut Node, VfsError> {
        self.nodes.get_mut(id.0).ok_or_else(|| VfsError::UnknownNode {
            id: id.0,
            operation: operation.to_string(),
        })
    }
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
