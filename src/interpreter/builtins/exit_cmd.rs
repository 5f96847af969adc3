//! exit - End session builtin

use crate::commands::{CommandResult, HostAction};

/// Handle the exit builtin command.
///
/// Closing is best effort: the host decides whether to honour
/// [`HostAction::CloseSession`].
pub fn handle_exit(_args: &[String]) -> CommandResult {
    CommandResult::plain("Closing session. Goodbye!").with_action(HostAction::CloseSession)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_requests_close() {
        let result = handle_exit(&[]);
        assert_eq!(result.plain_text(), "Closing session. Goodbye!");
        assert_eq!(result.action, Some(HostAction::CloseSession));
    }

    #[test]
    fn test_exit_ignores_arguments() {
        assert_eq!(handle_exit(&["3".to_string()]), handle_exit(&[]));
    }
}
