//! Terminal session: the mutable state behind one mounted terminal.
//!
//! A [`Session`] owns the scrollback, the input buffer, and the navigation
//! context. Dispatch is awaited to completion before the next submission is
//! accepted; the namespace itself is shared read-only between sessions.
//! Sessions are created with [`Session::new`] and simply dropped to dispose;
//! nothing here depends on a rendering framework.

use std::sync::Arc;

use crate::config;
use crate::core::autocomplete::{apply, suggest};
use crate::core::commands::{CommandRegistry, dispatch};
use crate::core::filesystem::{VirtualFs, resolve};
use crate::models::{FolderNode, Line, Node};

// =============================================================================
// SessionContext
// =============================================================================

/// Navigation state handed to command handlers.
///
/// The working folder is always the node the breadcrumb reaches from the
/// root; navigation goes through [`enter`](Self::enter) and
/// [`leave`](Self::leave) so the two can never diverge.
pub struct SessionContext {
    fs: Arc<VirtualFs>,
    breadcrumb: Vec<String>,
}

impl SessionContext {
    /// Create a context rooted at `~`.
    pub fn new(fs: Arc<VirtualFs>) -> Self {
        Self {
            fs,
            breadcrumb: vec![config::ROOT_NAME.to_string()],
        }
    }

    /// The current working folder as a node.
    pub fn working_dir(&self) -> &Node {
        resolve(self.fs.root(), &self.breadcrumb[1..]).unwrap_or_else(|| self.fs.root())
    }

    /// The current working folder.
    pub fn working_folder(&self) -> &FolderNode {
        self.working_dir()
            .as_folder()
            .unwrap_or_else(|| self.fs.root_folder())
    }

    /// Path segments from the root to the working folder, root included.
    pub fn breadcrumb(&self) -> &[String] {
        &self.breadcrumb
    }

    /// The namespace this session navigates.
    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Descend into `segments` (already validated by the caller).
    pub fn enter(&mut self, segments: &[String]) {
        self.breadcrumb.extend(segments.iter().cloned());
    }

    /// Go up one level; at the root this is a no-op.
    pub fn leave(&mut self) {
        if self.breadcrumb.len() > 1 {
            self.breadcrumb.pop();
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Whether a dispatch is currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Executing,
}

/// One mounted terminal: scrollback, input buffer, and navigation.
pub struct Session {
    ctx: SessionContext,
    history: Vec<Line>,
    input: String,
    phase: Phase,
    recall: Vec<String>,
    recall_index: Option<usize>,
}

impl Session {
    /// Create a session seeded with the welcome banner.
    pub fn new(fs: Arc<VirtualFs>) -> Self {
        Self {
            ctx: SessionContext::new(fs),
            history: vec![
                Line::accent(config::WELCOME_HEADLINE),
                Line::output(config::WELCOME_HINT),
            ],
            input: String::new(),
            phase: Phase::Idle,
            recall: Vec::new(),
            recall_index: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn history(&self) -> &[Line] {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn breadcrumb(&self) -> &[String] {
        &self.ctx.breadcrumb
    }

    /// The working directory path shown next to the prompt.
    pub fn prompt_path(&self) -> String {
        self.ctx.breadcrumb.join("/")
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    // -------------------------------------------------------------------------
    // Input buffer
    // -------------------------------------------------------------------------

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Submit the current input buffer.
    pub async fn submit(&mut self) {
        let raw = std::mem::take(&mut self.input);
        self.submit_line(&raw).await;
    }

    /// Dispatch one line. Empty (after trimming) submissions are ignored, as
    /// is anything submitted while a dispatch is still executing.
    pub async fn submit_line(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() || self.phase == Phase::Executing {
            return;
        }

        self.phase = Phase::Executing;
        self.remember(raw);
        dispatch(raw, &mut self.ctx, &mut self.history).await;
        self.phase = Phase::Idle;
    }

    // -------------------------------------------------------------------------
    // Tab completion
    // -------------------------------------------------------------------------

    /// Handle a Tab press.
    ///
    /// A single candidate is applied to the input buffer silently; several
    /// candidates echo the current input and the candidate list to the
    /// scrollback without dispatching anything.
    pub fn complete(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }

        let names = CommandRegistry::shared().names();
        let candidates = suggest(&self.input, self.ctx.working_folder(), &names);
        match candidates.as_slice() {
            [] => {}
            [single] => self.input = apply(&self.input, single),
            many => {
                self.history.push(Line::command(self.input.clone()));
                self.history.push(Line::output(many.join("  ")));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Command recall (Up/Down)
    // -------------------------------------------------------------------------

    fn remember(&mut self, raw: &str) {
        if self.recall.last().map(String::as_str) != Some(raw) {
            self.recall.push(raw.to_string());
            if self.recall.len() > config::MAX_COMMAND_RECALL {
                self.recall.remove(0);
            }
        }
        self.recall_index = None;
    }

    /// Move through previously submitted lines; negative is older, positive
    /// is newer. Returns the line to place in the input buffer, or `None`
    /// when moving past the newest entry.
    pub fn recall(&mut self, direction: i32) -> Option<String> {
        if self.recall.is_empty() {
            return None;
        }

        let new_index = match self.recall_index {
            None if direction < 0 => Some(self.recall.len() - 1),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < self.recall.len() - 1 => Some(i + 1),
            Some(_) if direction > 0 => None,
            other => other,
        };

        self.recall_index = new_index;
        new_index.map(|i| self.recall[i].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineKind;

    fn test_session() -> Session {
        let json = r#"{
            "root": [
                {
                    "type": "folder",
                    "name": "skills",
                    "children": [
                        { "type": "folder", "name": "labs", "children": [] },
                        { "type": "file", "name": "frontend.txt", "lines": [{ "text": "React" }] }
                    ]
                },
                { "type": "folder", "name": "projects", "children": [] },
                { "type": "file", "name": "status.txt", "lines": [{ "text": "shipping" }] }
            ]
        }"#;
        Session::new(Arc::new(VirtualFs::from_json(json).unwrap()))
    }

    #[test]
    fn test_welcome_banner_on_mount() {
        let session = test_session();
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].kind, LineKind::Accent);
    }

    #[tokio::test]
    async fn test_submit_echoes_then_outputs() {
        let mut session = test_session();
        session.submit_line("pwd").await;
        let history = session.history();
        assert_eq!(history[2].kind, LineKind::Command);
        assert_eq!(history[2].text, "pwd");
        assert_eq!(history[3].text, "~");
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_submit_blank_is_ignored() {
        let mut session = test_session();
        session.submit_line("   ").await;
        assert_eq!(session.history().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_takes_the_input_buffer() {
        let mut session = test_session();
        session.set_input("echo hi");
        session.submit().await;
        assert_eq!(session.input(), "");
        assert_eq!(session.history().last().unwrap().text, "hi");
    }

    #[tokio::test]
    async fn test_clear_empties_scrollback() {
        let mut session = test_session();
        session.submit_line("pwd").await;
        session.submit_line("clear").await;
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_breadcrumb_matches_working_dir_after_cd_sequence() {
        let mut session = test_session();
        for line in ["cd skills", "cd labs", "cd ..", "cd ..", "cd projects"] {
            session.submit_line(line).await;
        }
        assert_eq!(session.breadcrumb(), ["~", "projects"]);

        // resolve(root, breadcrumb[1..]) always lands on the working folder
        let ctx = session.context();
        let resolved = resolve(ctx.fs().root(), &ctx.breadcrumb()[1..]).unwrap();
        assert!(std::ptr::eq(resolved, ctx.working_dir()));
        assert_eq!(ctx.working_dir().name(), "projects");
    }

    #[tokio::test]
    async fn test_failed_cd_keeps_session_usable() {
        let mut session = test_session();
        session.submit_line("cd nowhere").await;
        assert_eq!(session.breadcrumb(), ["~"]);
        session.submit_line("ls").await;
        assert_eq!(session.history().last().unwrap().text, "status.txt");
    }

    #[test]
    fn test_tab_single_candidate_completes_silently() {
        let mut session = test_session();
        session.set_input("ls sk");
        let before = session.history().len();
        session.complete();
        assert_eq!(session.input(), "ls skills");
        assert_eq!(session.history().len(), before);
    }

    #[test]
    fn test_tab_command_completion_appends_space() {
        let mut session = test_session();
        session.set_input("pw");
        session.complete();
        assert_eq!(session.input(), "pwd ");
    }

    #[test]
    fn test_tab_multiple_candidates_echoed() {
        let mut session = test_session();
        session.set_input("c");
        let before = session.history().len();
        session.complete();
        // Input unchanged; echo line + candidate line appended.
        assert_eq!(session.input(), "c");
        assert_eq!(session.history().len(), before + 2);
        let candidates = &session.history().last().unwrap().text;
        assert!(candidates.contains("cat"));
        assert!(candidates.contains("cd"));
        assert!(candidates.contains("clear"));
    }

    #[test]
    fn test_tab_no_candidates_is_a_no_op() {
        let mut session = test_session();
        session.set_input("zz");
        let before = session.history().len();
        session.complete();
        assert_eq!(session.input(), "zz");
        assert_eq!(session.history().len(), before);
    }

    #[tokio::test]
    async fn test_recall_walks_backwards_and_forwards() {
        let mut session = test_session();
        session.submit_line("pwd").await;
        session.submit_line("ls").await;

        assert_eq!(session.recall(-1).as_deref(), Some("ls"));
        assert_eq!(session.recall(-1).as_deref(), Some("pwd"));
        assert_eq!(session.recall(-1).as_deref(), Some("pwd"));
        assert_eq!(session.recall(1).as_deref(), Some("ls"));
        assert_eq!(session.recall(1), None);
    }

    #[tokio::test]
    async fn test_recall_skips_consecutive_duplicates() {
        let mut session = test_session();
        session.submit_line("pwd").await;
        session.submit_line("pwd").await;
        assert_eq!(session.recall(-1).as_deref(), Some("pwd"));
        assert_eq!(session.recall(-1).as_deref(), Some("pwd"));
    }
}
