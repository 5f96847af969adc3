//! Portfolio Terminal
//!
//! Main entry point for the shell session.
//! Ties together the file system, the command registry and session state.

use std::sync::Arc;

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::debug;

use crate::commands::{create_default_registry, CommandContext, CommandRegistry, CommandResult};
use crate::fs::{build_portfolio, NodeId, Vfs, VfsError};
use crate::interpreter::completion::{complete_word, last_word};
use crate::interpreter::{
    dispatch_builtin, CommandHistory, HostEnvironment, LocationData, SessionState,
    DEFAULT_HISTORY_LIMIT, SHELL_BUILTINS,
};

lazy_static::lazy_static! {
    /// Set on first access; the host touches it at startup.
    static ref PROCESS_START: DateTime<Local> = Local::now();
}

/// When the process (or the first session) started.
pub fn process_start() -> DateTime<Local> {
    *PROCESS_START
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerminalError {
    #[error("ENOTDIR: not a directory, chdir '{path}'")]
    NotADirectory { path: String },

    #[error("ENOENT: no such node, chdir #{id}")]
    UnknownNode { id: usize },

    #[error(transparent)]
    Vfs(#[from] VfsError),
}

/// Options for creating a Terminal.
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    /// Prompt label
    pub user: String,
    /// Entries kept before the oldest is dropped
    pub history_limit: usize,
    /// Facts reported by `status`
    pub environment: HostEnvironment,
    /// Uptime origin (defaults to the process start)
    pub started_at: Option<DateTime<Local>>,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            user: "jm0ran".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            environment: HostEnvironment::default(),
            started_at: None,
        }
    }
}

/// The command interpreter for one session.
pub struct Terminal {
    fs: Arc<Vfs>,
    registry: CommandRegistry,
    state: SessionState,
}

impl Terminal {
    /// Create a session over a shared file system, starting at its root.
    pub fn new(fs: Arc<Vfs>, options: TerminalOptions) -> Self {
        let started_at = options.started_at.unwrap_or_else(process_start);
        let mut state = SessionState::new(&options.user, options.history_limit, started_at);
        state.environment = options.environment;

        Self {
            fs,
            registry: create_default_registry(),
            state,
        }
    }

    /// Create a session over a freshly built portfolio tree.
    pub fn with_portfolio(options: TerminalOptions) -> Result<Self, TerminalError> {
        let fs = build_portfolio()?;
        Ok(Self::new(Arc::new(fs), options))
    }

    pub fn fs(&self) -> &Arc<Vfs> {
        &self.fs
    }

    pub fn current_directory(&self) -> NodeId {
        self.state.cwd
    }

    pub fn current_path(&self) -> String {
        self.fs.path(self.state.cwd).unwrap_or_else(|| "/".to_string())
    }

    /// Jump straight to `folder`. Only folders of this session's file system
    /// are accepted.
    pub fn update_current_directory(&mut self, folder: NodeId) -> Result<(), TerminalError> {
        let node = self
            .fs
            .node(folder)
            .ok_or(TerminalError::UnknownNode { id: folder.index() })?;
        if !node.is_directory() {
            return Err(TerminalError::NotADirectory {
                path: self.fs.path(folder).unwrap_or_default(),
            });
        }
        self.state.cwd = folder;
        debug!(path = %self.current_path(), "current directory updated by host");
        Ok(())
    }

    /// Last write wins.
    pub fn update_location_data(&mut self, data: LocationData) {
        debug!(location = ?data.describe(), "location data updated");
        self.state.location = Some(data);
    }

    pub fn location(&self) -> Option<&LocationData> {
        self.state.location.as_ref()
    }

    pub fn update_environment(&mut self, environment: HostEnvironment) {
        self.state.environment = environment;
    }

    pub fn history(&self) -> &CommandHistory {
        &self.state.history
    }

    /// Mutable access for up/down recall.
    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.state.history
    }

    pub fn prompt(&self) -> String {
        format!("{}:{}$ ", self.state.user, self.current_path())
    }

    /// Execute one submitted line.
    pub fn execute_command(&mut self, raw: &str) -> CommandResult {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CommandResult::empty();
        }
        self.state.history.push(trimmed);

        let mut parts = trimmed.split_whitespace();
        let command_name = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<String> = parts.map(String::from).collect();
        debug!(command = %command_name, args = args.len(), "dispatching command");

        if let Some(result) = dispatch_builtin(&mut self.state, &self.fs, &command_name, &args) {
            return result;
        }

        match self.registry.get(&command_name) {
            Some(cmd) => cmd.execute(CommandContext {
                args,
                fs: &self.fs,
                session: &self.state,
                now: Local::now(),
            }),
            None => CommandResult::plain(format!("Command not found: {}", raw)),
        }
    }

    /// Completion candidates for the last word of `input`: command names for
    /// the first word, otherwise names in the current directory (folders
    /// with a trailing `/`).
    pub fn completions(&self, input: &str) -> Vec<String> {
        let word = last_word(input);
        let completing_command = input.trim_start().len() == word.len();

        if completing_command {
            let names = self.registry.names().into_iter().chain(SHELL_BUILTINS.iter().copied());
            return complete_word(word, names);
        }

        let entries: Vec<String> = self
            .fs
            .children(self.state.cwd)
            .into_iter()
            .filter_map(|id| self.fs.node(id))
            .map(|node| {
                if node.is_directory() {
                    format!("{}/", node.name())
                } else {
                    node.name().to_string()
                }
            })
            .collect();
        complete_word(word, entries.iter().map(|s| s.as_str()))
    }
}
