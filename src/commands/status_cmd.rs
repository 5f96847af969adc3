use chrono::Duration;

use crate::commands::style::{text, HEADING, SECTION};
use crate::commands::{Command, CommandContext, CommandResult, StyledSegment};
use crate::interpreter::HostEnvironment;

pub struct StatusCommand;

const NOT_AVAILABLE: &str = "N/A";

/// `Hh Mm Ss`; negative spans read as zero.
pub fn format_uptime(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
}

fn dimensions(size: Option<(u16, u16)>) -> String {
    match size {
        Some((width, height)) => format!("{}x{}", width, height),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn environment_rows(env: &HostEnvironment) -> Vec<(&'static str, String)> {
    vec![
        ("User Agent", env.user_agent.clone()),
        ("Language", env.language.clone()),
        ("Platform", env.platform.clone()),
        ("Screen", dimensions(env.screen)),
        ("Viewport", dimensions(env.viewport)),
        ("Connection", if env.online { "online" } else { "offline" }.to_string()),
        ("Cookies", if env.cookies_enabled { "enabled" } else { "disabled" }.to_string()),
    ]
}

impl Command for StatusCommand {
    fn name(&self) -> &'static str {
        "status"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let session = ctx.session;
        let location = session
            .location
            .as_ref()
            .and_then(|data| data.describe())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let mut rows = vec![
            ("Time", ctx.now.format("%Y-%m-%d %H:%M:%S").to_string()),
            ("Uptime", format_uptime(ctx.now.signed_duration_since(session.started_at))),
            ("Location", location),
        ];
        rows.extend(environment_rows(&session.environment));

        let mut segments = vec![
            StyledSegment::new("Session Status:").color(HEADING).bold(),
            text("\n"),
        ];
        let last = rows.len().saturating_sub(1);
        for (idx, (label, mut value)) in rows.into_iter().enumerate() {
            if idx < last {
                value.push('\n');
            }
            segments.push(StyledSegment::new(format!("{}: ", label)).color(SECTION).bold());
            segments.push(text(value));
        }

        CommandResult::styled(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use crate::fs::Vfs;
    use crate::interpreter::{LocationData, SessionState};
    use chrono::{Local, TimeZone};

    fn session_at(start: chrono::DateTime<Local>) -> SessionState {
        SessionState::new("jm0ran", 10, start)
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::seconds(0)), "0h 0m 0s");
        assert_eq!(format_uptime(Duration::seconds(3725)), "1h 2m 5s");
        assert_eq!(format_uptime(Duration::seconds(90061)), "25h 1m 1s");
        assert_eq!(format_uptime(Duration::seconds(-5)), "0h 0m 0s");
    }

    #[test]
    fn test_status_without_location() {
        let fs = Vfs::new();
        let start = Local.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
        let session = session_at(start);
        let mut ctx = context(&fs, &session, vec![]);
        ctx.now = start + Duration::seconds(3725);

        let output = StatusCommand.execute(ctx).plain_text();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Session Status:");
        assert_eq!(lines[1], "Time: 2025-05-01 13:02:05");
        assert_eq!(lines[2], "Uptime: 1h 2m 5s");
        assert_eq!(lines[3], "Location: N/A");
        assert_eq!(lines[4], "User Agent: Unknown");
        assert_eq!(lines[7], "Screen: N/A");
        assert_eq!(lines[9], "Connection: offline");
        assert_eq!(lines[10], "Cookies: disabled");
        assert_eq!(lines.len(), 11);
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_status_with_location_and_environment() {
        let fs = Vfs::new();
        let mut session = session_at(Local::now());
        session.location = Some(LocationData {
            ip: Some("203.0.113.7".to_string()),
            city: Some("Rochester".to_string()),
            region: Some("New York".to_string()),
            country: Some("United States".to_string()),
        });
        session.environment = HostEnvironment {
            user_agent: "Mozilla/5.0".to_string(),
            language: "en-US".to_string(),
            platform: "Linux x86_64".to_string(),
            screen: Some((1920, 1080)),
            viewport: Some((1280, 720)),
            online: true,
            cookies_enabled: true,
        };

        let output = StatusCommand.execute(context(&fs, &session, vec![])).plain_text();
        assert!(output.contains("\nLocation: Rochester, New York, United States (203.0.113.7)\n"));
        assert!(output.contains("\nLanguage: en-US\n"));
        assert!(output.contains("\nScreen: 1920x1080\n"));
        assert!(output.contains("\nViewport: 1280x720\n"));
        assert!(output.contains("\nConnection: online\n"));
        assert!(output.ends_with("Cookies: enabled"));
    }

    #[test]
    fn test_status_empty_location_is_na() {
        let fs = Vfs::new();
        let mut session = session_at(Local::now());
        session.location = Some(LocationData::default());
        let output = StatusCommand.execute(context(&fs, &session, vec![])).plain_text();
        assert!(output.contains("\nLocation: N/A\n"));
    }
}
