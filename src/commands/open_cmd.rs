use crate::commands::style::{text, COMMAND, LINK};
use crate::commands::whoami_cmd::{GITHUB_URL, LINKEDIN_URL};
use crate::commands::{Command, CommandContext, CommandResult, HostAction, StyledSegment};

pub struct OpenCommand;

/// (target, label, url)
const TARGETS: &[(&str, &str, &str)] = &[
    ("linkedin", "LinkedIn", LINKEDIN_URL),
    ("github", "GitHub", GITHUB_URL),
];

fn usage() -> CommandResult {
    let mut segments = vec![
        text("Usage: "),
        StyledSegment::new("open <target>").color(COMMAND).bold(),
        text("\nTargets:"),
    ];
    for (target, _, url) in TARGETS {
        segments.push(text("\n  "));
        segments.push(StyledSegment::new(*target).color(COMMAND).bold());
        segments.push(text(format!("{:width$}", "", width = 10usize.saturating_sub(target.len()))));
        segments.push(StyledSegment::new(*url).color(LINK).underline().link(url));
    }
    CommandResult::styled(segments)
}

impl Command for OpenCommand {
    fn name(&self) -> &'static str {
        "open"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(target) = ctx.first_arg() else {
            return usage();
        };

        let wanted = target.to_lowercase();
        match TARGETS.iter().find(|(name, _, _)| *name == wanted) {
            Some((_, label, url)) => CommandResult::plain(format!("Opening {}...", label))
                .with_action(HostAction::OpenUrl { url: url.to_string() }),
            None => CommandResult::plain(format!("Unknown target: {}", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, portfolio_session};

    fn run(args: Vec<&str>) -> CommandResult {
        let (fs, session) = portfolio_session("/");
        OpenCommand.execute(context(&fs, &session, args))
    }

    #[test]
    fn test_open_linkedin() {
        let result = run(vec!["linkedin"]);
        assert_eq!(result.plain_text(), "Opening LinkedIn...");
        assert_eq!(
            result.action,
            Some(HostAction::OpenUrl { url: "https://linkedin.com/in/joedmoran".to_string() })
        );
    }

    #[test]
    fn test_open_github_case_insensitive() {
        let result = run(vec!["GitHub"]);
        assert_eq!(result.plain_text(), "Opening GitHub...");
        assert_eq!(
            result.action,
            Some(HostAction::OpenUrl { url: "https://github.com/jm0ran".to_string() })
        );
    }

    #[test]
    fn test_open_without_target_lists_exactly_two_targets() {
        let result = run(vec![]);
        assert!(result.action.is_none());
        let segments = result.text.segments().unwrap();
        let targets: Vec<&str> = segments
            .iter()
            .filter(|s| s.color.as_deref() == Some(COMMAND) && !s.text.starts_with("open"))
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(targets, vec!["linkedin", "github"]);
        assert!(result.plain_text().starts_with("Usage: open <target>\nTargets:\n  linkedin"));
    }

    #[test]
    fn test_open_unknown_target() {
        let result = run(vec!["twitter"]);
        assert_eq!(result, CommandResult::plain("Unknown target: twitter"));
    }
}
