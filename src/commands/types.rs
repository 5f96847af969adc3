// src/commands/types.rs
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::fs::{NodeId, Vfs};
use crate::interpreter::types::SessionState;

fn is_false(value: &bool) -> bool {
    !*value
}

/// A run of text sharing one style. An optional `link` turns the segment
/// into a hyperlink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledSegment {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl StyledSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Default::default() }
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn background(mut self, color: &str) -> Self {
        self.background_color = Some(color.to_string());
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn link(mut self, target: &str) -> Self {
        self.link = Some(target.to_string());
        self
    }
}

/// Text body of a result: a bare string or an ordered run of styled segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Plain(String),
    Styled(Vec<StyledSegment>),
}

impl Output {
    /// The text with all styling dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Output::Plain(text) => text.clone(),
            Output::Styled(segments) => segments.iter().map(|s| s.text.as_str()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Output::Plain(text) => text.is_empty(),
            Output::Styled(segments) => segments.iter().all(|s| s.text.is_empty()),
        }
    }

    pub fn segments(&self) -> Option<&[StyledSegment]> {
        match self {
            Output::Plain(_) => None,
            Output::Styled(segments) => Some(segments),
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::Plain(String::new())
    }
}

/// Side effects the host is asked to carry out after rendering a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostAction {
    /// Wipe the whole transcript instead of appending.
    ClearTranscript,
    /// Open an external URL in a new browsing context.
    OpenUrl { url: String },
    /// Close the session (best effort; the host may refuse).
    CloseSession,
    /// The current directory changed; prompts should be re-rendered.
    DirectoryChanged { path: String },
}

/// 命令执行结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub text: Output,
    /// Lines meant to be laid out beside `text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<HostAction>,
}

impl CommandResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: Output::Plain(text.into()), ..Default::default() }
    }

    pub fn styled(segments: Vec<StyledSegment>) -> Self {
        Self { text: Output::Styled(segments), ..Default::default() }
    }

    pub fn with_graphic(mut self, lines: Vec<String>) -> Self {
        self.graphic = Some(lines);
        self
    }

    pub fn with_action(mut self, action: HostAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Shorthand for `self.text.plain_text()`.
    pub fn plain_text(&self) -> String {
        self.text.plain_text()
    }
}

/// 命令执行上下文
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub fs: &'a Vfs,
    pub session: &'a SessionState,
    pub now: DateTime<Local>,
}

impl<'a> CommandContext<'a> {
    pub fn cwd(&self) -> NodeId {
        self.session.cwd
    }

    /// Only the first positional argument is ever consumed.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(|s| s.as_str())
    }
}

/// 命令 trait
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
