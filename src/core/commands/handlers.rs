//! Built-in command implementations.

use async_trait::async_trait;

use crate::config;
use crate::core::error::ShellError;
use crate::core::filesystem::resolve;
use crate::core::session::SessionContext;
use crate::models::{FolderNode, Line, Node};

use super::CommandHandler;

// =============================================================================
// help
// =============================================================================

pub struct Help;

#[async_trait]
impl CommandHandler for Help {
    async fn execute(&self, _args: &[String], _ctx: &mut SessionContext) -> Vec<Line> {
        let mut lines = vec![Line::accent("Available commands:")];
        for (usage, description) in config::COMMAND_REFERENCE {
            lines.push(Line::output(format!("  {usage:<14}{description}")));
        }
        lines.push(Line::output(""));
        lines.push(Line::folder("  folders end with a slash"));
        lines.push(Line::file("  files are plain names"));
        lines
    }
}

// =============================================================================
// ls
// =============================================================================

pub struct Ls;

#[async_trait]
impl CommandHandler for Ls {
    async fn execute(&self, args: &[String], ctx: &mut SessionContext) -> Vec<Line> {
        let cwd = ctx.working_dir();
        let target = if args.is_empty() {
            Some(cwd)
        } else {
            resolve(cwd, args)
        };

        match target {
            Some(Node::Folder(folder)) => {
                if folder.children.is_empty() {
                    return vec![Line::output("Empty directory")];
                }
                folder
                    .children
                    .iter()
                    .map(|child| match child {
                        Node::Folder(f) => Line::folder(format!("{}/", f.name)),
                        Node::File(f) => Line::file(f.name.clone()),
                    })
                    .collect()
            }
            _ => vec![ShellError::NotADirectory.to_line()],
        }
    }
}

// =============================================================================
// cat
// =============================================================================

pub struct Cat;

#[async_trait]
impl CommandHandler for Cat {
    async fn execute(&self, args: &[String], ctx: &mut SessionContext) -> Vec<Line> {
        match resolve(ctx.working_dir(), args) {
            None => vec![ShellError::FileNotFound.to_line()],
            Some(Node::Folder(_)) => vec![ShellError::IsADirectory.to_line()],
            Some(Node::File(file)) => file.content.lines().await,
        }
    }
}

// =============================================================================
// cd
// =============================================================================

pub struct Cd;

#[async_trait]
impl CommandHandler for Cd {
    async fn execute(&self, args: &[String], ctx: &mut SessionContext) -> Vec<Line> {
        let Some(first) = args.first() else {
            return Vec::new();
        };

        if first == ".." {
            ctx.leave();
            return Vec::new();
        }

        let target_is_folder = matches!(resolve(ctx.working_dir(), args), Some(Node::Folder(_)));
        if target_is_folder {
            ctx.enter(args);
            Vec::new()
        } else {
            vec![ShellError::NoSuchDirectory.to_line()]
        }
    }
}

// =============================================================================
// pwd
// =============================================================================

pub struct Pwd;

#[async_trait]
impl CommandHandler for Pwd {
    async fn execute(&self, _args: &[String], ctx: &mut SessionContext) -> Vec<Line> {
        vec![Line::path(ctx.breadcrumb().join("/"))]
    }
}

// =============================================================================
// echo
// =============================================================================

pub struct Echo;

#[async_trait]
impl CommandHandler for Echo {
    async fn execute(&self, args: &[String], _ctx: &mut SessionContext) -> Vec<Line> {
        vec![Line::output(args.join(" "))]
    }
}

// =============================================================================
// date
// =============================================================================

pub struct Date;

#[async_trait]
impl CommandHandler for Date {
    async fn execute(&self, _args: &[String], _ctx: &mut SessionContext) -> Vec<Line> {
        let now = chrono::Local::now();
        vec![Line::output(now.format(config::DATE_FORMAT).to_string())]
    }
}

// =============================================================================
// tree
// =============================================================================

pub struct Tree;

#[async_trait]
impl CommandHandler for Tree {
    async fn execute(&self, args: &[String], ctx: &mut SessionContext) -> Vec<Line> {
        let cwd = ctx.working_dir();
        let target = if args.is_empty() {
            Some(cwd)
        } else {
            resolve(cwd, args)
        };

        match target {
            Some(Node::Folder(folder)) => {
                let mut lines = vec![Line::folder(format!("{}/", folder.name))];
                render_tree(folder, "", &mut lines);
                lines
            }
            _ => vec![ShellError::NotADirectory.to_line()],
        }
    }
}

/// Depth-first tree rendering with an accumulated prefix.
///
/// The last entry of each folder gets `└──`; every other entry gets `├──`.
/// Non-last ancestors contribute `│   ` to the prefix, last ancestors four
/// spaces.
fn render_tree(folder: &FolderNode, prefix: &str, lines: &mut Vec<Line>) {
    let count = folder.children.len();
    for (index, child) in folder.children.iter().enumerate() {
        let last = index + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        match child {
            Node::Folder(sub) => {
                lines.push(Line::folder(format!("{prefix}{connector}{}/", sub.name)));
                let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
                render_tree(sub, &child_prefix, lines);
            }
            Node::File(file) => {
                lines.push(Line::file(format!("{prefix}{connector}{}", file.name)));
            }
        }
    }
}

// =============================================================================
// whoami
// =============================================================================

pub struct Whoami;

#[async_trait]
impl CommandHandler for Whoami {
    async fn execute(&self, _args: &[String], _ctx: &mut SessionContext) -> Vec<Line> {
        vec![
            Line::accent(config::WHOAMI_ROLE),
            Line::output(config::WHOAMI_TAGLINE),
        ]
    }
}

// =============================================================================
// history
// =============================================================================

pub struct History;

#[async_trait]
impl CommandHandler for History {
    async fn execute(&self, _args: &[String], _ctx: &mut SessionContext) -> Vec<Line> {
        vec![
            Line::output("Your history is the scrollback above."),
            Line::output("Run 'clear' to start over."),
        ]
    }
}
