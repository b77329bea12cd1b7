//! Core logic for the portfolio terminal.
//!
//! This module provides:
//! - [`VirtualFs`] and [`resolve`] - the static namespace and its resolver
//! - [`suggest`] / [`apply`] - tab completion
//! - [`CommandRegistry`] and [`dispatch`] - the fixed command table
//! - [`Session`] - per-terminal mutable state

mod autocomplete;
mod commands;
mod error;
mod filesystem;
mod session;

pub use autocomplete::{PATH_COMMANDS, apply, suggest};
pub use commands::{CommandHandler, CommandRegistry, dispatch};
pub use error::ShellError;
pub use filesystem::{VirtualFs, resolve};
pub use session::{Phase, Session, SessionContext};
