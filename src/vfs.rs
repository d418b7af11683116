//! Virtual Filesystem
//!
//! Simple in-memory namespace for the terminal. Nothing here touches a real
//! disk: the tree is built once at startup and commands only read it.
//! Directories keep their children in insertion order.

use std::fmt;

use thiserror::Error;

/// File kinds understood by the terminal commands
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FileKind {
    /// Plain text, displayed by `open`
    Text,
    /// Content is a target the presentation layer opens externally
    Link,
    /// Content is a key into the content library, consumed by `serve`
    Page,
}

/// File or directory node
#[derive(Clone, Debug)]
pub enum VfsNode {
    Directory {
        name: String,
        children: Vec<VfsNode>,
    },
    File {
        name: String,
        kind: FileKind,
        content: String,
    },
}

impl VfsNode {
    /// Create the root directory
    pub fn root() -> Self {
        VfsNode::Directory {
            name: String::from("/"),
            children: Vec::new(),
        }
    }

    /// Create an empty directory
    pub fn dir(name: &str) -> Self {
        VfsNode::Directory {
            name: String::from(name),
            children: Vec::new(),
        }
    }

    /// Create a text file
    pub fn text(name: &str, content: &str) -> Self {
        VfsNode::File {
            name: String::from(name),
            kind: FileKind::Text,
            content: String::from(content),
        }
    }

    /// Create a link file pointing at `target`
    pub fn link(name: &str, target: &str) -> Self {
        VfsNode::File {
            name: String::from(name),
            kind: FileKind::Link,
            content: String::from(target),
        }
    }

    /// Create a page file holding a content-library key
    pub fn page(name: &str, key: &str) -> Self {
        VfsNode::File {
            name: String::from(name),
            kind: FileKind::Page,
            content: String::from(key),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            VfsNode::Directory { name, .. } => name,
            VfsNode::File { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, VfsNode::Directory { .. })
    }

    /// Children in insertion order; empty for files
    pub fn children(&self) -> &[VfsNode] {
        match self {
            VfsNode::Directory { children, .. } => children,
            VfsNode::File { .. } => &[],
        }
    }

    /// Look up a direct child by name
    pub fn child(&self, name: &str) -> Option<&VfsNode> {
        self.children().iter().find(|c| c.name() == name)
    }

    /// Add a child node; sibling names must stay unique
    pub fn insert(&mut self, node: VfsNode) -> Result<(), VfsError> {
        match self {
            VfsNode::Directory { children, .. } => {
                if children.iter().any(|c| c.name() == node.name()) {
                    return Err(VfsError::AlreadyExists);
                }
                children.push(node);
                Ok(())
            }
            VfsNode::File { .. } => Err(VfsError::NotADirectory),
        }
    }
}

/// Normalized absolute path; an empty segment list is the root
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VfsPath {
    segments: Vec<String>,
}

impl VfsPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for VfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "/")
        } else {
            for seg in &self.segments {
                write!(f, "/{}", seg)?;
            }
            Ok(())
        }
    }
}

/// Filesystem errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VfsError {
    #[error("no such file or directory")]
    NotFound,
    #[error("not a directory")]
    NotADirectory,
    #[error("already exists")]
    AlreadyExists,
}

/// Walk `path` down from `root`
pub fn lookup<'a>(root: &'a VfsNode, path: &VfsPath) -> Option<&'a VfsNode> {
    let mut node = root;
    for seg in path.segments() {
        node = node.child(seg)?;
    }
    Some(node)
}

/// Resolve a raw path string against `base`, handling `/`, `.` and `..`.
/// The final node may be a file or a directory; every intermediate segment
/// must be an existing directory.
pub fn resolve(raw: &str, base: &VfsPath, root: &VfsNode) -> Result<VfsPath, VfsError> {
    let path = normalize(raw, base);
    let mut node = root;
    for seg in path.segments() {
        if !node.is_dir() {
            return Err(VfsError::NotADirectory);
        }
        node = node.child(seg).ok_or(VfsError::NotFound)?;
    }
    Ok(path)
}

/// Resolve a raw path string that must name a directory
pub fn resolve_dir(raw: &str, base: &VfsPath, root: &VfsNode) -> Result<VfsPath, VfsError> {
    let path = resolve(raw, base, root)?;
    match lookup(root, &path) {
        Some(VfsNode::Directory { .. }) => Ok(path),
        Some(VfsNode::File { .. }) => Err(VfsError::NotADirectory),
        None => Err(VfsError::NotFound),
    }
}

// Collapse a raw path into absolute segments; `..` above the root stays at
// the root.
fn normalize(raw: &str, base: &VfsPath) -> VfsPath {
    let mut segments: Vec<String> = if raw.starts_with('/') {
        Vec::new()
    } else {
        base.segments().to_vec()
    };

    for part in raw.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(String::from(s)),
        }
    }

    VfsPath { segments }
}
