//! Command registry and dispatch.
//!
//! Commands are a fixed, statically-constructed table mapping lower-cased
//! names to handler objects; there is no runtime registration. [`dispatch`]
//! echoes the submitted line, intercepts `clear`, and otherwise hands the
//! parsed arguments to the matching handler.

mod handlers;

use std::sync::LazyLock;

use async_trait::async_trait;

use crate::core::error::ShellError;
use crate::core::session::SessionContext;
use crate::models::Line;

// =============================================================================
// Handler Abstraction
// =============================================================================

/// A command implementation.
///
/// Handlers receive the whitespace-split arguments and the session's
/// navigation context, and return the lines to append to the scrollback.
/// Navigation commands mutate the context instead of producing output.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, args: &[String], ctx: &mut SessionContext) -> Vec<Line>;
}

// =============================================================================
// Registry
// =============================================================================

/// Fixed table of built-in commands, in vocabulary order.
pub struct CommandRegistry {
    entries: Vec<(&'static str, Box<dyn CommandHandler>)>,
}

impl CommandRegistry {
    fn builtin() -> Self {
        let entries: Vec<(&'static str, Box<dyn CommandHandler>)> = vec![
            ("help", Box::new(handlers::Help)),
            ("ls", Box::new(handlers::Ls)),
            ("cat", Box::new(handlers::Cat)),
            ("cd", Box::new(handlers::Cd)),
            ("pwd", Box::new(handlers::Pwd)),
            ("echo", Box::new(handlers::Echo)),
            ("date", Box::new(handlers::Date)),
            ("tree", Box::new(handlers::Tree)),
            ("whoami", Box::new(handlers::Whoami)),
            ("history", Box::new(handlers::History)),
        ];
        Self { entries }
    }

    /// The process-wide registry.
    pub fn shared() -> &'static CommandRegistry {
        static SHARED: LazyLock<CommandRegistry> = LazyLock::new(CommandRegistry::builtin);
        &SHARED
    }

    /// Look up a handler by lower-cased name.
    pub fn get(&self, name: &str) -> Option<&dyn CommandHandler> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, handler)| handler.as_ref())
    }

    /// All command names in vocabulary order, for `help` and autocomplete.
    ///
    /// Includes `clear`, which the dispatcher handles itself.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.iter().map(|(name, _)| *name).collect();
        names.push("clear");
        names
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Dispatch one submitted line against the registry.
///
/// The raw line is echoed to the scrollback first, as typed. Matching is done
/// on the lower-cased line, so entry names containing uppercase letters are
/// not reachable through command arguments.
pub async fn dispatch(raw: &str, ctx: &mut SessionContext, history: &mut Vec<Line>) {
    history.push(Line::command(raw));

    let lowered = raw.to_lowercase();
    let mut tokens = lowered.split_whitespace();
    let Some(command) = tokens.next() else {
        return;
    };
    let args: Vec<String> = tokens.map(str::to_string).collect();

    tracing::debug!(command, argc = args.len(), "dispatching");

    if command == "clear" {
        history.clear();
        return;
    }

    match CommandRegistry::shared().get(command) {
        Some(handler) => {
            let lines = handler.execute(&args, ctx).await;
            history.extend(lines);
        }
        None => history.push(ShellError::CommandNotFound(command.to_string()).to_line()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VirtualFs;
    use crate::models::LineKind;
    use std::sync::Arc;

    fn test_ctx() -> SessionContext {
        let json = r#"{
            "root": [
                {
                    "type": "folder",
                    "name": "skills",
                    "children": [
                        { "type": "file", "name": "frontend.txt", "lines": [{ "text": "React" }] }
                    ]
                },
                { "type": "folder", "name": "Labs", "children": [] }
            ]
        }"#;
        SessionContext::new(Arc::new(VirtualFs::from_json(json).unwrap()))
    }

    #[test]
    fn test_registry_names_in_vocabulary_order() {
        let names = CommandRegistry::shared().names();
        assert_eq!(
            names,
            vec![
                "help", "ls", "cat", "cd", "pwd", "echo", "date", "tree", "whoami", "history",
                "clear"
            ]
        );
    }

    #[test]
    fn test_registry_lookup() {
        let registry = CommandRegistry::shared();
        assert!(registry.get("ls").is_some());
        assert!(registry.get("clear").is_none());
        assert!(registry.get("xyz123").is_none());
    }

    #[tokio::test]
    async fn test_dispatch_echoes_raw_input() {
        let mut ctx = test_ctx();
        let mut history = Vec::new();
        dispatch("Echo Hello", &mut ctx, &mut history).await;
        assert_eq!(history[0].kind, LineKind::Command);
        assert_eq!(history[0].text, "Echo Hello");
    }

    #[tokio::test]
    async fn test_dispatch_lowercases_the_whole_line() {
        // Arguments are lower-cased along with the command word.
        let mut ctx = test_ctx();
        let mut history = Vec::new();
        dispatch("echo HELLO", &mut ctx, &mut history).await;
        assert_eq!(history[1].text, "hello");
    }

    #[tokio::test]
    async fn test_uppercase_entry_unreachable() {
        // Consequence of whole-line lower-casing: `Labs` exists but `cd labs`
        // looks up the lower-cased name and fails.
        let mut ctx = test_ctx();
        let mut history = Vec::new();
        dispatch("cd Labs", &mut ctx, &mut history).await;
        assert_eq!(history[1].text, "No such directory");
        assert_eq!(ctx.breadcrumb(), ["~"]);
    }

    #[tokio::test]
    async fn test_unknown_command_single_error_line() {
        let mut ctx = test_ctx();
        let mut history = Vec::new();
        dispatch("xyz123 --flag", &mut ctx, &mut history).await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].kind, LineKind::Error);
        assert_eq!(history[1].text, "Command not found: xyz123");
        assert_eq!(ctx.breadcrumb(), ["~"]);
    }

    #[tokio::test]
    async fn test_clear_resets_history_without_output() {
        let mut ctx = test_ctx();
        let mut history = vec![Line::output("old")];
        dispatch("clear", &mut ctx, &mut history).await;
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_is_case_insensitive_on_command_word() {
        let mut ctx = test_ctx();
        let mut history = Vec::new();
        dispatch("PWD", &mut ctx, &mut history).await;
        assert_eq!(history[1].text, "~");
    }
}
