//! Filesystem namespace types.
//!
//! The namespace is a static tree of [`Node`]s: folders holding uniquely
//! named children, and files holding pre-rendered [`Line`]s or a deferred
//! content generator awaited at read time.

use serde::{Deserialize, Serialize};

use crate::models::Line;

// =============================================================================
// Node Tree
// =============================================================================

/// An entry in the namespace: a folder or a file.
#[derive(Clone, Debug)]
pub enum Node {
    Folder(FolderNode),
    File(FileNode),
}

impl Node {
    /// The entry's name.
    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }

    /// Check if this entry is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// Get the folder payload (folders only).
    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }
}

/// A folder with uniquely named children.
///
/// Children keep their manifest order; listings display them in that order.
#[derive(Clone, Debug)]
pub struct FolderNode {
    pub name: String,
    pub children: Vec<Node>,
}

impl FolderNode {
    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// Names of all direct children, in display order.
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(Node::name).collect()
    }
}

/// A file whose content is a sequence of lines.
#[derive(Clone, Debug)]
pub struct FileNode {
    pub name: String,
    pub content: FileContent,
}

/// File content: static lines, or a generator awaited at read time.
#[derive(Clone, Debug)]
pub enum FileContent {
    Static(Vec<Line>),
    Dynamic(Generator),
}

impl FileContent {
    /// Produce the content lines, awaiting the generator if deferred.
    pub async fn lines(&self) -> Vec<Line> {
        match self {
            FileContent::Static(lines) => lines.clone(),
            FileContent::Dynamic(generator) => generator.produce().await,
        }
    }
}

// =============================================================================
// Content Generators
// =============================================================================

/// Named generators for files whose content is computed when read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generator {
    /// Session/system snapshot assembled at read time.
    SysInfo,
}

impl Generator {
    /// Resolve a manifest generator tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "sysinfo" => Some(Self::SysInfo),
            _ => None,
        }
    }

    /// Produce the content lines.
    pub async fn produce(&self) -> Vec<Line> {
        match self {
            Self::SysInfo => {
                let now = chrono::Local::now();
                vec![
                    Line::accent(format!(
                        "{} v{}",
                        crate::config::APP_NAME,
                        env!("CARGO_PKG_VERSION")
                    )),
                    Line::output(format!("platform : {}", std::env::consts::OS)),
                    Line::output(format!(
                        "read at  : {}",
                        now.format(crate::config::DATE_FORMAT)
                    )),
                ]
            }
        }
    }
}

// =============================================================================
// Manifest Types
// =============================================================================

/// Root manifest structure from `manifest.json`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Manifest {
    /// Top-level entries of the namespace root.
    pub root: Vec<ManifestNode>,
}

/// One namespace entry in the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ManifestNode {
    Folder {
        name: String,
        #[serde(default)]
        children: Vec<ManifestNode>,
    },
    File {
        name: String,
        #[serde(default)]
        lines: Vec<ManifestLine>,
        /// Generator tag for deferred content (e.g. "sysinfo").
        #[serde(default, skip_serializing_if = "Option::is_none")]
        generator: Option<String>,
    },
}

/// One content line in the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ManifestLine {
    pub text: String,
    #[serde(default = "ManifestLine::default_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl ManifestLine {
    fn default_kind() -> String {
        "output".to_string()
    }

    /// Convert to a terminal [`Line`], falling back to plain output for
    /// unknown kinds.
    pub fn to_line(&self) -> Line {
        let mut line = match self.kind.as_str() {
            "command" => Line::command(&self.text),
            "output" => Line::output(&self.text),
            "path" => Line::path(&self.text),
            "success" => Line::success(&self.text),
            "accent" => Line::accent(&self.text),
            "error" => Line::error(&self.text),
            "folder" => Line::folder(&self.text),
            "file" => Line::file(&self.text),
            other => {
                tracing::warn!(kind = other, "unknown line kind in manifest");
                Line::output(&self.text)
            }
        };
        if let Some(prefix) = &self.prefix {
            line.prefix = Some(prefix.clone());
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineKind;

    #[test]
    fn test_node_name_and_kind() {
        let file = Node::File(FileNode {
            name: "status.txt".to_string(),
            content: FileContent::Static(vec![]),
        });
        assert_eq!(file.name(), "status.txt");
        assert!(!file.is_folder());
        assert!(file.as_folder().is_none());

        let folder = Node::Folder(FolderNode {
            name: "skills".to_string(),
            children: vec![file],
        });
        assert_eq!(folder.name(), "skills");
        assert!(folder.is_folder());
    }

    #[test]
    fn test_child_lookup() {
        let folder = FolderNode {
            name: "skills".to_string(),
            children: vec![
                Node::File(FileNode {
                    name: "frontend.txt".to_string(),
                    content: FileContent::Static(vec![]),
                }),
                Node::File(FileNode {
                    name: "backend.txt".to_string(),
                    content: FileContent::Static(vec![]),
                }),
            ],
        };
        assert!(folder.child("frontend.txt").is_some());
        assert!(folder.child("missing.txt").is_none());
        assert_eq!(folder.child_names(), vec!["frontend.txt", "backend.txt"]);
    }

    #[test]
    fn test_manifest_line_kinds() {
        let line = ManifestLine {
            text: "hello".to_string(),
            kind: "accent".to_string(),
            prefix: None,
        };
        assert_eq!(line.to_line().kind, LineKind::Accent);

        let unknown = ManifestLine {
            text: "hello".to_string(),
            kind: "sparkle".to_string(),
            prefix: None,
        };
        assert_eq!(unknown.to_line().kind, LineKind::Output);
    }

    #[test]
    fn test_manifest_line_prefix_override() {
        let line = ManifestLine {
            text: "fueled by coffee".to_string(),
            kind: "output".to_string(),
            prefix: Some("☕".to_string()),
        };
        assert_eq!(line.to_line().prefix.as_deref(), Some("☕"));
    }

    #[test]
    fn test_generator_tag() {
        assert_eq!(Generator::from_tag("sysinfo"), Some(Generator::SysInfo));
        assert_eq!(Generator::from_tag("nope"), None);
    }

    #[tokio::test]
    async fn test_dynamic_content_is_awaited() {
        let content = FileContent::Dynamic(Generator::SysInfo);
        let lines = content.lines().await;
        assert!(!lines.is_empty());
        assert!(lines[0].text.contains("termfolio"));
    }
}
