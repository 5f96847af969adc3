// src/commands/cat/mod.rs
use crate::commands::style::{join_lines, text};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(filename) = ctx.first_arg() else {
            return CommandResult::plain("cat: missing file argument");
        };

        let Some(id) = ctx.fs.child(ctx.cwd(), filename.trim_end_matches('/')) else {
            return CommandResult::plain(format!("cat: {}: No such file or directory", filename));
        };

        match ctx.fs.content(id) {
            Some(content) => CommandResult::styled(join_lines(
                content.split('\n').map(|line| text(line)).collect(),
            )),
            None => CommandResult::plain(format!("cat: {}: Is a directory", filename)),
        }
    }
}
