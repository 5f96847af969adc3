use crate::commands::style::{text, ACCENT, COMMAND, HEADING, SECTION, TIP};
use crate::commands::{Command, CommandContext, CommandResult, StyledSegment};

pub struct HelpCommand;

const USAGE_WIDTH: usize = 23;

const CATEGORIES: &[(&str, &[(&str, &str)])] = &[
    ("Navigation Commands", &[
        ("pwd", "Print working directory"),
        ("ls", "List directory contents"),
        ("cd <directory>", "Change to specified directory"),
        ("cd ..", "Go to parent directory"),
        ("tree", "Show the directory tree"),
    ]),
    ("File Commands", &[
        ("cat <filename>", "Display file contents"),
    ]),
    ("System Commands", &[
        ("clear", "Clear the terminal screen"),
        ("help", "Show this help message"),
        ("history [-c]", "Show or clear command history"),
        ("status", "Show session and browser details"),
        ("exit", "Close this session"),
    ]),
    ("Personal Commands", &[
        ("whoami", "Display personal information"),
        ("skills", "List technical skills"),
        ("open <target>", "Open linkedin or github"),
    ]),
];

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        let mut segments = vec![
            StyledSegment::new("Available Commands:").color(HEADING).bold(),
        ];

        for (category, entries) in CATEGORIES {
            segments.push(text("\n\n"));
            segments.push(StyledSegment::new(format!("{}:", category)).color(SECTION).bold());
            for (usage, description) in entries.iter() {
                let pad = USAGE_WIDTH.saturating_sub(usage.chars().count()).max(1);
                segments.push(text("\n  "));
                segments.push(StyledSegment::new(*usage).color(COMMAND).bold());
                segments.push(text(format!("{}{}", " ".repeat(pad), description)));
            }
        }

        segments.extend([
            text("\n\n"),
            StyledSegment::new("Tips:").color(TIP).bold(),
            text("\n• Use "),
            StyledSegment::new("up/down arrows").color(ACCENT).bold(),
            text(" to navigate command history"),
            text("\n• Press "),
            StyledSegment::new("Tab").color(ACCENT).bold(),
            text(" to complete commands and file names"),
            text("\n• Try "),
            StyledSegment::new("cd jobs").color(ACCENT).bold(),
            text(" to explore work experience files"),
        ]);

        CommandResult::styled(segments)
    }
}
