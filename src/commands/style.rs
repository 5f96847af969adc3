//! Terminal palette shared by the commands.

use super::types::StyledSegment;

pub const TEXT: &str = "#ffffff";
pub const HEADING: &str = "#00ff00";
pub const SECTION: &str = "#61dafb";
pub const COMMAND: &str = "#ffff00";
pub const TIP: &str = "#ff6b35";
pub const ACCENT: &str = "#32cd32";
pub const DIRECTORY: &str = "#61dafb";
pub const FILE: &str = "#ffffff";
pub const LINK: &str = "#87ceeb";
pub const MUTED: &str = "#808080";

/// Plain white text.
pub fn text(s: impl Into<String>) -> StyledSegment {
    StyledSegment::new(s).color(TEXT)
}

/// A name as `ls` and `tree` show it: directories bold with a trailing `/`.
pub fn entry_name(name: &str, is_directory: bool) -> StyledSegment {
    if is_directory {
        StyledSegment::new(format!("{}/", name)).color(DIRECTORY).bold()
    } else {
        StyledSegment::new(name).color(FILE)
    }
}

/// Append `\n` to every segment but the last so that each segment keeps
/// exactly one rendered line.
pub fn join_lines(mut lines: Vec<StyledSegment>) -> Vec<StyledSegment> {
    let last = lines.len().saturating_sub(1);
    for segment in lines.iter_mut().take(last) {
        segment.text.push('\n');
    }
    lines
}
