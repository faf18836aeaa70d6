//! The interactive command loop and its plumbing.

pub mod command;
pub mod handlers;
pub mod input;
pub mod output;
pub mod prompt;
pub mod registry;
pub mod script;

use tracing::debug;

use crate::session::Session;

use command::{CommandResult, Outcome};
use input::ReadError;
use output::OutputSink;
use registry::CommandRegistry;

/// Split a raw line into a verb and its argument tail and run the matching
/// command. Returns `None` for a blank line.
pub fn dispatch(
    line: &str,
    registry: &CommandRegistry,
    session: &mut Session,
) -> Option<CommandResult> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (verb, args) = match line.find(char::is_whitespace) {
        Some(at) => {
            let (verb, rest) = line.split_at(at);
            let rest = rest.trim_start();
            (verb, (!rest.is_empty()).then_some(rest))
        }
        None => (line, None),
    };
    debug!(verb, args, "dispatching");
    match registry.get(verb) {
        Some(command) => Some(command.run(args, registry, session)),
        None => Some(CommandResult::error(format!(
            "unknown command '{verb}'; type 'help' for the list"
        ))),
    }
}

/// Print a command result through the sink.
pub fn render(result: &CommandResult, output: &OutputSink) {
    match result.outcome {
        Outcome::Success => {
            if let Some(message) = &result.message {
                output.success(message);
            }
        }
        Outcome::Error | Outcome::Interrupted => {
            output.error(result.message.as_deref().unwrap_or("command failed"));
        }
    }
}

/// Run the interactive loop until `exit`, end-of-input, or a terminal
/// failure. End-of-input saves the collection first; `exit` does not.
pub fn run(registry: &CommandRegistry, session: &mut Session) {
    while session.running {
        match session.input.read_line("> ") {
            Ok(line) => {
                if let Some(result) = dispatch(&line, registry, session) {
                    render(&result, &session.output);
                }
            }
            Err(ReadError::Interrupted) => session.output.say("^C"),
            Err(ReadError::Eof) => {
                session.output.say("end of input; saving before exit");
                save_on_exit(session);
                session.running = false;
            }
            Err(ReadError::Failed(e)) => {
                session.output.error(&format!("terminal failure: {e}"));
                session.running = false;
            }
        }
    }
    session.input.close_all();
    session.output.say("session ended");
}

fn save_on_exit(session: &mut Session) {
    match session.store.save(session.collection.iter()) {
        Ok(()) => session.output.success(&format!(
            "saved {} record(s) to {}",
            session.collection.len(),
            session.store.path().display()
        )),
        Err(e) => session.output.error(&format!("save failed: {e}")),
    }
}
