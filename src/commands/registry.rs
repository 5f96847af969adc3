// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Look up a command. Names are registered lowercase, so `name` is
    /// folded before the lookup.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(&name.to_lowercase()).map(|c| c.as_ref())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::clear_cmd::ClearCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::open_cmd::OpenCommand;
use super::pwd::PwdCommand;
use super::skills_cmd::SkillsCommand;
use super::status_cmd::StatusCommand;
use super::tree_cmd::TreeCommand;
use super::whoami_cmd::WhoamiCommand;

/// 注册所有只读命令
pub fn register_defaults(registry: &mut CommandRegistry) {
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(SkillsCommand));
    registry.register(Box::new(StatusCommand));
    registry.register(Box::new(OpenCommand));
}

/// 创建默认注册表
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_defaults(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = create_default_registry();
        assert_eq!(
            registry.names(),
            vec!["cat", "clear", "help", "ls", "open", "pwd", "skills", "status", "tree", "whoami"]
        );
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = create_default_registry();
        assert!(registry.contains("LS"));
        assert_eq!(registry.get("WhoAmI").map(|c| c.name()), Some("whoami"));
        assert!(registry.get("cd").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = CommandRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }
}
