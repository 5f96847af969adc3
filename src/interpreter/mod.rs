//! Interpreter module
//!
//! Session state, history, completion and the builtins that mutate them.

pub mod builtin_dispatch;
pub mod builtins;
pub mod completion;
pub mod history;
pub mod types;

pub use builtin_dispatch::{dispatch_builtin, SHELL_BUILTINS};
pub use completion::{apply_completion, complete_word, last_word, CompletionCycle};
pub use history::{CommandHistory, DEFAULT_HISTORY_LIMIT};
pub use types::*;
