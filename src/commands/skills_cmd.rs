use crate::commands::style::{text, ACCENT, HEADING, SECTION};
use crate::commands::{Command, CommandContext, CommandResult, StyledSegment};

pub struct SkillsCommand;

const SKILLS: &[(&str, &[&str])] = &[
    ("Languages", &["Java", "Python", "C++", "C", "Rust", "JavaScript", "TypeScript", "C#", "Matlab"]),
    ("Systems", &["Embedded software", "Distributed systems", "Network protocols", "Concurrent programming"]),
    ("Web", &["React", "HTML/CSS", "REST APIs"]),
    ("Infrastructure", &["Linux", "Docker", "Virtualization", "WireGuard", "Build automation"]),
    ("Tools", &["Git", "Unit testing", "SAP"]),
];

impl Command for SkillsCommand {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        let mut segments = vec![StyledSegment::new("Technical Skills:").color(HEADING).bold()];

        for (group, items) in SKILLS {
            segments.push(text("\n\n"));
            segments.push(StyledSegment::new(format!("{}:", group)).color(SECTION).bold());
            segments.push(text("\n  "));
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    segments.push(text(", "));
                }
                segments.push(StyledSegment::new(*item).color(ACCENT));
            }
        }

        CommandResult::styled(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, portfolio_session};

    #[test]
    fn test_skills_sections() {
        let (fs, session) = portfolio_session("/");
        let output = SkillsCommand.execute(context(&fs, &session, vec![])).plain_text();
        assert!(output.starts_with("Technical Skills:\n\nLanguages:\n  Java, Python"));
        for (group, _) in SKILLS {
            assert!(output.contains(&format!("{}:", group)));
        }
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_skills_is_static() {
        let (fs, session) = portfolio_session("/jobs");
        let first = SkillsCommand.execute(context(&fs, &session, vec![]));
        let second = SkillsCommand.execute(context(&fs, &session, vec!["extra"]));
        assert_eq!(first, second);
    }
}
