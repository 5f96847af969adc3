//! Builtin Command Dispatch
//!
//! Routes `cd`, `exit` and `history` to their handlers. Everything else falls
//! through to the command registry.

use crate::commands::CommandResult;
use crate::fs::Vfs;
use crate::interpreter::builtins::{handle_cd, handle_exit, handle_history};
use crate::interpreter::types::SessionState;

/// Names handled here, in dispatch order.
pub const SHELL_BUILTINS: &[&str] = &["cd", "exit", "history"];

/// Dispatch a command to the appropriate builtin handler.
/// Returns None if the command should be looked up in the registry.
pub fn dispatch_builtin(
    state: &mut SessionState,
    fs: &Vfs,
    command_name: &str,
    args: &[String],
) -> Option<CommandResult> {
    match command_name {
        "cd" => Some(handle_cd(state, fs, args)),
        "exit" => Some(handle_exit(args)),
        "history" => Some(handle_history(state, args)),
        _ => None,
    }
}
