// src/commands/mod.rs
pub mod cat;
pub mod clear_cmd;
pub mod help_cmd;
pub mod ls;
pub mod open_cmd;
pub mod pwd;
pub mod registry;
pub mod skills_cmd;
pub mod status_cmd;
pub mod style;
pub mod tree_cmd;
pub mod types;
pub mod whoami_cmd;

pub use registry::{create_default_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult, HostAction, Output, StyledSegment};
