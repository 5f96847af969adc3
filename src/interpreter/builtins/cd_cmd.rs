//! cd - Change directory builtin
//!
//! Supports:
//! - cd <dir> - change to a child folder of the current directory
//! - cd .. - change to the parent folder

use tracing::debug;

use crate::commands::{CommandResult, HostAction};
use crate::fs::Vfs;
use crate::interpreter::types::SessionState;

/// Handle the cd builtin command
pub fn handle_cd(state: &mut SessionState, fs: &Vfs, args: &[String]) -> CommandResult {
    let Some(target) = args.first() else {
        return CommandResult::plain("cd: missing directory argument");
    };

    // Completion offers folders as `name/`.
    let name = match target.trim_end_matches('/') {
        "" => target.as_str(),
        trimmed => trimmed,
    };

    let next = if name == ".." {
        match fs.parent(state.cwd) {
            Some(parent) => parent,
            None => return CommandResult::plain("cd: already at root directory"),
        }
    } else {
        match fs.child(state.cwd, name) {
            None => return CommandResult::plain(format!("cd: {}: No such file or directory", target)),
            Some(id) if !fs.is_directory(id) => {
                return CommandResult::plain(format!("cd: {}: Not a directory", target));
            }
            Some(id) => id,
        }
    };

    state.cwd = next;
    let path = fs.path(next).unwrap_or_else(|| "/".to_string());
    debug!(path = %path, "changed directory");
    CommandResult::empty().with_action(HostAction::DirectoryChanged { path })
}
