use crate::commands::{Command, CommandContext, CommandResult, HostAction};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::empty().with_action(HostAction::ClearTranscript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, portfolio_session};

    #[test]
    fn test_clear_requests_transcript_wipe() {
        let (fs, session) = portfolio_session("/");
        let result = ClearCommand.execute(context(&fs, &session, vec![]));
        assert!(result.text.is_empty());
        assert_eq!(result.action, Some(HostAction::ClearTranscript));
        assert!(result.graphic.is_none());
    }

    #[test]
    fn test_clear_ignores_args() {
        let (fs, session) = portfolio_session("/jobs");
        let result = ClearCommand.execute(context(&fs, &session, vec!["--all"]));
        assert_eq!(result, CommandResult::empty().with_action(HostAction::ClearTranscript));
    }
}
