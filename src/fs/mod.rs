//! File System Module
//!
//! Read-only virtual file system the shell navigates:
//! - types: node, id and error types
//! - vfs: the arena tree itself
//! - manifest: the compiled-in portfolio content

pub mod types;
pub mod vfs;
pub mod manifest;

pub use types::*;
pub use vfs::Vfs;
pub use manifest::build_portfolio;
