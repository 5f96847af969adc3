//! Builtin Commands
//!
//! Commands that read or change session state rather than only the file
//! system. They are dispatched before the command registry.

pub mod cd_cmd;
pub mod exit_cmd;
pub mod history_cmd;

pub use cd_cmd::handle_cd;
pub use exit_cmd::handle_exit;
pub use history_cmd::handle_history;
