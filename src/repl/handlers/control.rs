//! Session-level verbs: help, persistence, scripting, exit.

use crate::repl::command::{Command, CommandResult};
use crate::repl::registry::CommandRegistry;
use crate::repl::script;
use crate::session::Session;

pub struct Help;

impl Command for Help {
    fn run(
        &self,
        _args: Option<&str>,
        registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let mut verbs: Vec<_> = registry.iter().collect();
        verbs.sort_by_key(|(name, _)| *name);
        let mut listing = String::from("available commands:\n");
        for (name, command) in verbs {
            listing.push_str(&format!("  {:<28} {}\n", name, command.description()));
        }
        session.output.say(listing.trim_end());
        CommandResult::ok()
    }

    fn description(&self) -> &'static str {
        "list every command with a short description"
    }
}

pub struct Save;

impl Command for Save {
    fn run(
        &self,
        _args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        match session.store.save(session.collection.iter()) {
            Ok(()) => {
                let count = session.collection.len();
                CommandResult::success(format!(
                    "saved {count} record(s) to {}",
                    session.store.path().display()
                ))
            }
            Err(e) => CommandResult::error(format!("save failed: {e}")),
        }
    }

    fn description(&self) -> &'static str {
        "write the collection to its file"
    }
}

pub struct ExecuteScript;

impl Command for ExecuteScript {
    fn run(
        &self,
        args: Option<&str>,
        registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let Some(path) = args else {
            return CommandResult::error("usage: execute_script <path>");
        };
        script::execute_script(path, registry, session)
    }

    fn description(&self) -> &'static str {
        "replay the commands in a script file"
    }
}

pub struct Exit;

impl Command for Exit {
    fn run(
        &self,
        _args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        session.running = false;
        CommandResult::success("exiting without saving")
    }

    fn description(&self) -> &'static str {
        "end the session without saving"
    }
}
