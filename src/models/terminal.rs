//! Terminal output types.
//!
//! A [`Line`] is one unit of scrollback: text, a semantic kind the renderer
//! maps to a style, and an optional prefix glyph.

// =============================================================================
// Line Kind
// =============================================================================

/// Semantic kind of an output line.
///
/// The frontend maps each kind to a visual style; the core only tags lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Echoed user input (`$` prefix)
    Command,
    /// Plain output text
    Output,
    /// A filesystem path (pwd)
    Path,
    /// Success message
    Success,
    /// Highlighted message (`→` prefix)
    Accent,
    /// Error message (`✗` prefix)
    Error,
    /// A directory entry in listings
    Folder,
    /// A file entry in listings
    File,
}

// =============================================================================
// Line
// =============================================================================

/// A single line of terminal output.
///
/// Lines are immutable once constructed; handlers produce them and the
/// session appends them to its scrollback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// The visible text of the line
    pub text: String,
    /// Semantic kind used for styling
    pub kind: LineKind,
    /// Optional prefix glyph rendered before the text
    pub prefix: Option<String>,
}

impl Line {
    fn new(text: impl Into<String>, kind: LineKind, prefix: Option<&str>) -> Self {
        Self {
            text: text.into(),
            kind,
            prefix: prefix.map(str::to_string),
        }
    }

    /// Echoed command input, prefixed with the prompt glyph.
    pub fn command(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Command, Some("$"))
    }

    /// Plain output line.
    pub fn output(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Output, Some(" "))
    }

    /// Path line (pwd).
    pub fn path(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Path, Some(" "))
    }

    /// Success line.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Success, Some("→"))
    }

    /// Accented line.
    pub fn accent(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Accent, Some("→"))
    }

    /// Error line.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Error, Some("✗"))
    }

    /// Directory entry in a listing.
    pub fn folder(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Folder, Some(" "))
    }

    /// File entry in a listing.
    pub fn file(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::File, Some(" "))
    }
}
