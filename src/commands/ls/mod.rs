// src/commands/ls/mod.rs
use crate::commands::style::{entry_name, join_lines};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let children = ctx.fs.children(ctx.cwd());
        if children.is_empty() {
            return CommandResult::empty();
        }

        let lines = children
            .into_iter()
            .filter_map(|id| ctx.fs.node(id))
            .map(|node| entry_name(node.name(), node.is_directory()))
            .collect();

        CommandResult::styled(join_lines(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, portfolio_session};
    use crate::fs::Vfs;

    #[test]
    fn test_ls_root_lists_folders_in_insertion_order() {
        let (fs, session) = portfolio_session("/");
        let result = LsCommand.execute(context(&fs, &session, vec![]));
        assert_eq!(result.plain_text(), "jobs/\nprojects/\nacademics/");
        let segments = result.text.segments().unwrap();
        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|s| s.bold));
    }

    #[test]
    fn test_ls_files_are_styled_differently() {
        let (fs, session) = portfolio_session("/jobs");
        let result = LsCommand.execute(context(&fs, &session, vec![]));
        assert_eq!(result.plain_text(), "lockheed.txt\nbayer.txt\ntwo_roads.txt");
        let segments = result.text.segments().unwrap();
        assert!(segments.iter().all(|s| !s.bold));
    }

    #[test]
    fn test_ls_mixed_folder() {
        let mut fs = Vfs::new();
        fs.add_file(Vfs::ROOT, "readme.txt", "hi").unwrap();
        fs.add_folder(Vfs::ROOT, "docs").unwrap();
        let session = crate::interpreter::SessionState::new("u", 10, chrono::Local::now());
        let result = LsCommand.execute(context(&fs, &session, vec![]));
        assert_eq!(result.plain_text(), "readme.txt\ndocs/");
    }

    #[test]
    fn test_ls_empty_folder() {
        let mut fs = Vfs::new();
        let empty = fs.add_folder(Vfs::ROOT, "empty").unwrap();
        let mut session = crate::interpreter::SessionState::new("u", 10, chrono::Local::now());
        session.cwd = empty;
        let result = LsCommand.execute(context(&fs, &session, vec!["ignored"]));
        assert!(result.text.is_empty());
        assert_eq!(result, CommandResult::empty());
    }
}
