//! Data models for the terminal.
//!
//! - [`Node`], [`FolderNode`], [`FileNode`], [`FileContent`] - the namespace tree
//! - [`Manifest`], [`ManifestNode`], [`ManifestLine`] - serde types for `manifest.json`
//! - [`Line`], [`LineKind`] - terminal output

mod filesystem;
mod terminal;

pub use filesystem::{
    FileContent, FileNode, FolderNode, Generator, Manifest, ManifestLine, ManifestNode, Node,
};
pub use terminal::{Line, LineKind};
