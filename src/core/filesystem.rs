//! Virtual filesystem for the portfolio namespace.
//!
//! The tree is built once from a manifest and never mutated afterwards; all
//! sessions share it read-only. Path lookup is a plain segment walk; the
//! resolver does not interpret `.` or `..` (the `cd` handler owns the only
//! `..` semantics).

use std::sync::{Arc, LazyLock};

use crate::config;
use crate::models::{FileContent, FileNode, FolderNode, Generator, Manifest, ManifestNode, Node};

// =============================================================================
// Path Resolver
// =============================================================================

/// Resolve a sequence of path segments starting from `root`.
///
/// Each segment must name a child of the current folder; walking into a file
/// or a missing name fails. Empty `segments` returns `root` unchanged.
pub fn resolve<'a, S: AsRef<str>>(root: &'a Node, segments: &[S]) -> Option<&'a Node> {
    let mut current = root;
    for segment in segments {
        match current {
            Node::Folder(folder) => current = folder.child(segment.as_ref())?,
            Node::File(_) => return None,
        }
    }
    Some(current)
}

// =============================================================================
// VirtualFs
// =============================================================================

/// The static in-memory namespace.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    root: Node,
}

impl VirtualFs {
    /// Build the namespace from a manifest.
    ///
    /// Duplicate names within a folder are skipped with a warning; the first
    /// occurrence wins.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let root = Node::Folder(FolderNode {
            name: config::ROOT_NAME.to_string(),
            children: build_children(&manifest.root),
        });
        Self { root }
    }

    /// Build the namespace from manifest JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Ok(Self::from_manifest(&manifest))
    }

    /// An empty namespace (fallback when the manifest fails to parse).
    pub fn empty() -> Self {
        Self {
            root: Node::Folder(FolderNode {
                name: config::ROOT_NAME.to_string(),
                children: Vec::new(),
            }),
        }
    }

    /// The process-wide namespace built from the embedded manifest.
    pub fn shared() -> Arc<Self> {
        static SHARED: LazyLock<Arc<VirtualFs>> = LazyLock::new(|| {
            let fs = VirtualFs::from_json(config::MANIFEST_JSON).unwrap_or_else(|err| {
                tracing::error!(%err, "embedded manifest failed to parse");
                VirtualFs::empty()
            });
            Arc::new(fs)
        });
        SHARED.clone()
    }

    /// The root node (always a folder named `~`).
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The root folder.
    pub fn root_folder(&self) -> &FolderNode {
        match &self.root {
            Node::Folder(folder) => folder,
            // Root is constructed as a folder in every constructor.
            Node::File(_) => unreachable!("namespace root is always a folder"),
        }
    }
}

// =============================================================================
// Manifest Construction
// =============================================================================

fn build_children(nodes: &[ManifestNode]) -> Vec<Node> {
    let mut children: Vec<Node> = Vec::new();
    for manifest_node in nodes {
        let node = build_node(manifest_node);
        if children.iter().any(|c| c.name() == node.name()) {
            tracing::warn!(name = node.name(), "duplicate manifest entry, skipping");
            continue;
        }
        children.push(node);
    }
    children
}

fn build_node(node: &ManifestNode) -> Node {
    match node {
        ManifestNode::Folder { name, children } => Node::Folder(FolderNode {
            name: name.clone(),
            children: build_children(children),
        }),
        ManifestNode::File {
            name,
            lines,
            generator,
        } => {
            let static_content =
                || FileContent::Static(lines.iter().map(|l| l.to_line()).collect());
            let content = match generator.as_deref() {
                Some(tag) => match Generator::from_tag(tag) {
                    Some(generator) => FileContent::Dynamic(generator),
                    None => {
                        tracing::warn!(name, tag, "unknown generator tag, using static lines");
                        static_content()
                    }
                },
                None => static_content(),
            };
            Node::File(FileNode {
                name: name.clone(),
                content,
            })
        }
    }
}
