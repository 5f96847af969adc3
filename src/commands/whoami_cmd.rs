use crate::commands::style::{text, ACCENT, COMMAND, HEADING, LINK, SECTION, TIP};
use crate::commands::{Command, CommandContext, CommandResult, StyledSegment};

pub struct WhoamiCommand;

pub const EMAIL: &str = "josephdeargmoran@protonmail.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/joedmoran";
pub const GITHUB_URL: &str = "https://github.com/jm0ran";

const TITLE: &str = "#00bfff";
const LANGUAGES: &str = "#ff9500";
const WEB: &str = "#ff69b4";
const ROLES: &str = "#00ff7f";
const LINKEDIN_BLUE: &str = "#0077b5";

const PORTRAIT: &[&str] = &[
    "        ╭─────────────╮",
    "        │  ┌─────────┐ │",
    "        │  │ >_      │ │",
    "        │  │         │ │",
    "        │  │  ●   ●  │ │",
    "        │  │    ○    │ │",
    "        │  │  \\___/  │ │",
    "        │  │         │ │",
    "        │  └─────────┘ │",
    "        │      ___     │",
    "        │     /   \\    │",
    "        │    │  ●  │   │",
    "        │     \\___/    │",
    "        ╰─────────────╯",
    "            ████████",
    "          ██████████████",
];

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        let bullet = || StyledSegment::new("\n• ").color(COMMAND);

        let segments = vec![
            StyledSegment::new("Joseph D. Moran").color(HEADING).bold(),
            text(" - "),
            StyledSegment::new("Software Engineering Student").color(TITLE).bold(),
            text("\n"),
            bullet(),
            text("Fourth-year Software Engineering student at "),
            StyledSegment::new("RIT").color(TIP).bold(),
            text(" (GPA: 3.96/4.0)"),
            bullet(),
            text("Prior internships at "),
            StyledSegment::new("Lockheed Martin").color(SECTION).bold(),
            text(" and "),
            StyledSegment::new("Bayer Radiology").color(SECTION).bold(),
            bullet(),
            text("Skilled in "),
            StyledSegment::new("Java, Python, C++, Rust, JavaScript").color(LANGUAGES).bold(),
            bullet(),
            text("Experience with "),
            StyledSegment::new("embedded systems").color(ACCENT).bold(),
            text(" and "),
            StyledSegment::new("web development").color(WEB).bold(),
            bullet(),
            text("Seeking "),
            StyledSegment::new("backend/full-stack developer roles").color(ROLES).bold(),
            text(" - Graduating May 2026"),
            text("\n\nContact: "),
            StyledSegment::new(EMAIL)
                .color(LINK)
                .underline()
                .link(&format!("mailto:{}", EMAIL)),
            text(" | LinkedIn: "),
            StyledSegment::new("/in/joedmoran").color(LINKEDIN_BLUE).underline().link(LINKEDIN_URL),
            text(" | GitHub: "),
            StyledSegment::new("jm0ran").color(ACCENT).underline().link(GITHUB_URL),
        ];

        CommandResult::styled(segments)
            .with_graphic(PORTRAIT.iter().map(|line| line.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, portfolio_session};

    #[test]
    fn test_whoami_biography() {
        let (fs, session) = portfolio_session("/");
        let output = WhoamiCommand.execute(context(&fs, &session, vec![])).plain_text();
        assert!(output.starts_with("Joseph D. Moran - Software Engineering Student\n\n• Fourth-year"));
        assert!(output.contains("• Prior internships at Lockheed Martin and Bayer Radiology"));
        assert!(output.ends_with("| GitHub: jm0ran"));
    }

    #[test]
    fn test_whoami_has_graphic() {
        let (fs, session) = portfolio_session("/");
        let result = WhoamiCommand.execute(context(&fs, &session, vec![]));
        let graphic = result.graphic.unwrap();
        assert_eq!(graphic.len(), 16);
        assert_eq!(graphic[0], "        ╭─────────────╮");
        assert!(result.action.is_none());
    }

    #[test]
    fn test_whoami_contact_links() {
        let (fs, session) = portfolio_session("/");
        let result = WhoamiCommand.execute(context(&fs, &session, vec![]));
        let links: Vec<&str> = result
            .text
            .segments()
            .unwrap()
            .iter()
            .filter_map(|s| s.link.as_deref())
            .collect();
        assert_eq!(
            links,
            vec!["mailto:josephdeargmoran@protonmail.com", LINKEDIN_URL, GITHUB_URL]
        );
    }
}
