//! portfolio-shell - A simulated Unix shell over a read-only portfolio
//!
//! This library provides an in-memory file system holding resume content and
//! a small command interpreter (`ls`, `cd`, `cat`, `tree`, ...) that produces
//! styled results for a terminal-like front end.

pub mod commands;
pub mod config;
pub mod fs;
pub mod interpreter;
pub mod render;
pub mod terminal;

pub use commands::{CommandResult, HostAction, Output, StyledSegment};
pub use config::{ConfigError, HostConfig};
pub use fs::{build_portfolio, NodeId, Vfs, VfsError};
pub use interpreter::{CompletionCycle, HostEnvironment, LocationData};
pub use terminal::{Terminal, TerminalError, TerminalOptions};
