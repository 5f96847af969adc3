use crate::commands::style::{entry_name, text, MUTED};
use crate::commands::{Command, CommandContext, CommandResult, StyledSegment};
use crate::fs::{NodeId, Vfs};

pub struct TreeCommand;

#[derive(Default)]
struct TreeResult {
    segments: Vec<StyledSegment>,
    dir_count: usize,
    file_count: usize,
}

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let cwd = ctx.cwd();
        let mut result = TreeResult::default();

        let header = ctx.fs.path(cwd).unwrap_or_else(|| "/".to_string());
        result.segments.push(entry_name(header.trim_end_matches('/'), true));
        result.segments.push(StyledSegment::new("\n"));

        build_tree(ctx.fs, cwd, "", &mut result);

        result.segments.push(text(format!(
            "\n{} director{}, {} file{}",
            result.dir_count,
            if result.dir_count == 1 { "y" } else { "ies" },
            result.file_count,
            if result.file_count == 1 { "" } else { "s" },
        )));

        CommandResult::styled(result.segments)
    }
}

/// Depth-first walk in insertion order. The last child at each level takes
/// the terminal connector and passes a blank (bar-less) prefix to its subtree.
fn build_tree(fs: &Vfs, folder: NodeId, prefix: &str, result: &mut TreeResult) {
    let children = fs.children(folder);
    for (idx, child) in children.iter().enumerate() {
        let Some(node) = fs.node(*child) else { continue };
        let is_last = idx == children.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };

        result.segments.push(StyledSegment::new(format!("{}{}", prefix, connector)).color(MUTED));
        result.segments.push(entry_name(node.name(), node.is_directory()));
        result.segments.push(StyledSegment::new("\n"));

        if node.is_directory() {
            result.dir_count += 1;
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            build_tree(fs, *child, &child_prefix, result);
        } else {
            result.file_count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, portfolio_session};
    use crate::interpreter::SessionState;

    fn render(fs: &Vfs, cwd: NodeId) -> String {
        let mut session = SessionState::new("u", 10, chrono::Local::now());
        session.cwd = cwd;
        TreeCommand.execute(context(fs, &session, vec![])).plain_text()
    }

    #[test]
    fn test_tree_portfolio_root() {
        let (fs, session) = portfolio_session("/");
        let output = TreeCommand.execute(context(&fs, &session, vec![])).plain_text();
        let expected = "\
/
├── jobs/
│   ├── lockheed.txt
│   ├── bayer.txt
│   └── two_roads.txt
├── projects/
│   ├── rust_distributed_file_sharing.txt
│   ├── personal_homelab.txt
│   └── digital_phone_booth.txt
└── academics/
    └── education.txt

3 directories, 7 files";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_tree_nested_prefixes() {
        let mut fs = Vfs::new();
        let a = fs.add_folder(Vfs::ROOT, "a").unwrap();
        let inner = fs.add_folder(a, "inner").unwrap();
        fs.add_file(inner, "x.txt", "").unwrap();
        let b = fs.add_folder(Vfs::ROOT, "b").unwrap();
        let deep = fs.add_folder(b, "deep").unwrap();
        fs.add_file(deep, "y.txt", "").unwrap();

        let output = render(&fs, Vfs::ROOT);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "├── a/");
        assert_eq!(lines[2], "│   └── inner/");
        assert_eq!(lines[3], "│       └── x.txt");
        assert_eq!(lines[4], "└── b/");
        assert_eq!(lines[5], "    └── deep/");
        assert_eq!(lines[6], "        └── y.txt");
    }

    #[test]
    fn test_tree_from_subfolder() {
        let (fs, session) = portfolio_session("/academics");
        let output = TreeCommand.execute(context(&fs, &session, vec![])).plain_text();
        assert_eq!(output, "/academics/\n└── education.txt\n\n0 directories, 1 file");
    }

    #[test]
    fn test_tree_empty_folder() {
        let fs = Vfs::new();
        assert_eq!(render(&fs, Vfs::ROOT), "/\n\n0 directories, 0 files");
    }

    #[test]
    fn test_tree_directories_styled() {
        let (fs, session) = portfolio_session("/");
        let result = TreeCommand.execute(context(&fs, &session, vec![]));
        let segments = result.text.segments().unwrap();
        let jobs = segments.iter().find(|s| s.text == "jobs/").unwrap();
        let file = segments.iter().find(|s| s.text == "bayer.txt").unwrap();
        assert!(jobs.bold);
        assert_ne!(jobs.color, file.color);
    }
}
