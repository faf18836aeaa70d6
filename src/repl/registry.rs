//! Verb-name to handler mapping.

use std::collections::HashMap;

use super::command::Command;

/// Maps verb names to command handlers.
///
/// Lookup is case-insensitive. Registering a name twice replaces the earlier
/// handler; last registration wins.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, command: Box<dyn Command>) {
        self.commands.insert(name.to_lowercase(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(&name.to_lowercase()).map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All registered verbs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Command)> {
        self.commands
            .iter()
            .map(|(name, cmd)| (name.as_str(), cmd.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::command::CommandResult;
    use crate::session::Session;

    struct Fixed(&'static str);

    impl Command for Fixed {
        fn run(
            &self,
            _args: Option<&str>,
            _registry: &CommandRegistry,
            _session: &mut Session,
        ) -> CommandResult {
            CommandResult::success(self.0)
        }

        fn description(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut registry = CommandRegistry::new();
        registry.register("Show", Box::new(Fixed("show")));
        assert!(registry.get("SHOW").is_some());
        assert!(registry.get("show").is_some());
        assert!(registry.get("shown").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = CommandRegistry::new();
        registry.register("x", Box::new(Fixed("first")));
        registry.register("X", Box::new(Fixed("second")));
        assert_eq!(registry.len(), 1);
        let cmd = registry.get("x").unwrap();
        assert_eq!(cmd.description(), "second");
    }
}
