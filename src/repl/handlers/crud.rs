//! Verbs that mutate the collection.

use tracing::info;

use crate::repl::command::{Command, CommandResult};
use crate::repl::prompt::{self, EntryAbort};
use crate::repl::registry::CommandRegistry;
use crate::session::Session;

/// Map an aborted data-entry sequence to a command result. The abort stops
/// an enclosing script replay either way.
pub(super) fn abort_result(abort: EntryAbort, verb: &str) -> CommandResult {
    match abort {
        EntryAbort::Interrupted => CommandResult::interrupted(format!("{verb} cancelled")),
        EntryAbort::EndOfInput => {
            CommandResult::interrupted(format!("input ended before {verb} completed"))
        }
    }
}

pub struct Add;

impl Command for Add {
    fn run(
        &self,
        _args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let draft = match prompt::request_person(session) {
            Ok(draft) => draft,
            Err(abort) => return abort_result(abort, "add"),
        };
        let id = session.collection.add(draft);
        info!(id, "record added");
        CommandResult::success(format!("added record with id {id}"))
    }

    fn description(&self) -> &'static str {
        "add a new record (prompts for each field)"
    }
}

pub struct Update;

impl Command for Update {
    fn run(
        &self,
        args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let Some(raw) = args else {
            return CommandResult::error("usage: update <id>");
        };
        let id: i64 = match raw.parse() {
            Ok(id) => id,
            Err(_) => return CommandResult::error(format!("'{raw}' is not a valid id")),
        };
        if !session.collection.contains(id) {
            return CommandResult::error(format!("no record with id {id}"));
        }
        let draft = match prompt::request_person(session) {
            Ok(draft) => draft,
            Err(abort) => return abort_result(abort, "update"),
        };
        session.collection.update(id, draft);
        info!(id, "record updated");
        CommandResult::success(format!("updated record {id}"))
    }

    fn description(&self) -> &'static str {
        "replace the fields of the record with the given id"
    }
}

pub struct RemoveById;

impl Command for RemoveById {
    fn run(
        &self,
        args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let Some(raw) = args else {
            return CommandResult::error("usage: remove_by_id <id>");
        };
        let id: i64 = match raw.parse() {
            Ok(id) => id,
            Err(_) => return CommandResult::error(format!("'{raw}' is not a valid id")),
        };
        if session.collection.remove_by_id(id) {
            info!(id, "record removed");
            CommandResult::success(format!("removed record {id}"))
        } else {
            CommandResult::error(format!("no record with id {id}"))
        }
    }

    fn description(&self) -> &'static str {
        "remove the record with the given id"
    }
}

pub struct Clear;

impl Command for Clear {
    fn run(
        &self,
        _args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let removed = session.collection.len();
        session.collection.clear();
        info!(removed, "collection cleared");
        CommandResult::success(format!("cleared {removed} record(s)"))
    }

    fn description(&self) -> &'static str {
        "remove every record and reset the id counter"
    }
}

pub struct AddIfMin;

impl Command for AddIfMin {
    fn run(
        &self,
        _args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let draft = match prompt::request_person(session) {
            Ok(draft) => draft,
            Err(abort) => return abort_result(abort, "add_if_min"),
        };
        match session.collection.add_if_min(draft) {
            Some(id) => {
                info!(id, "record added as new minimum");
                CommandResult::success(format!("added record with id {id}"))
            }
            None => CommandResult::success("not added: candidate is not below the minimum"),
        }
    }

    fn description(&self) -> &'static str {
        "add a record only if it orders below the current minimum"
    }
}

/// Parse the threshold argument, prompting when absent.
fn threshold(
    args: Option<&str>,
    session: &mut Session,
    verb: &str,
) -> Result<i64, CommandResult> {
    match args {
        Some(raw) => match raw.parse::<i64>() {
            Ok(value) if value >= 1 => Ok(value),
            Ok(_) => Err(CommandResult::error(format!(
                "threshold must be a positive id, got {raw}"
            ))),
            Err(_) => Err(CommandResult::error(format!("'{raw}' is not a valid id"))),
        },
        None => prompt::request_i64(session, "threshold id (integer > 0): ", Some(1))
            .map_err(|abort| abort_result(abort, verb)),
    }
}

pub struct RemoveGreater;

impl Command for RemoveGreater {
    fn run(
        &self,
        args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let threshold = match threshold(args, session, "remove_greater") {
            Ok(value) => value,
            Err(result) => return result,
        };
        let removed = session.collection.remove_greater(threshold);
        info!(threshold, removed, "removed records above threshold");
        CommandResult::success(format!("removed {removed} record(s) with id > {threshold}"))
    }

    fn description(&self) -> &'static str {
        "remove every record with id strictly greater than the threshold"
    }
}

pub struct RemoveLower;

impl Command for RemoveLower {
    fn run(
        &self,
        args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let threshold = match threshold(args, session, "remove_lower") {
            Ok(value) => value,
            Err(result) => return result,
        };
        let removed = session.collection.remove_lower(threshold);
        info!(threshold, removed, "removed records below threshold");
        CommandResult::success(format!("removed {removed} record(s) with id < {threshold}"))
    }

    fn description(&self) -> &'static str {
        "remove every record with id strictly less than the threshold"
    }
}
