//! history - Display or clear the session's command history
//!
//! Supports:
//! - history - list every entry with its session-wide number
//! - history <n> - list the last n entries
//! - history -c - clear the history list

use crate::commands::CommandResult;
use crate::interpreter::types::SessionState;

pub fn handle_history(state: &mut SessionState, args: &[String]) -> CommandResult {
    if args.first().map(|s| s.as_str()) == Some("-c") {
        state.history.reset();
        return CommandResult::empty();
    }

    let total = state.history.len();
    let count = match args.first() {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n.min(total),
            Err(_) => {
                return CommandResult::plain(format!(
                    "history: {}: numeric argument required\nUsage: history [n] | history -c",
                    arg
                ));
            }
        },
        None => total,
    };

    let lines: Vec<String> = state
        .history
        .numbered()
        .skip(total - count)
        .map(|(number, cmd)| format!("{:5}  {}", number, cmd))
        .collect();

    CommandResult::plain(lines.join("\n"))
}
