//! Script replay: feed a file of command lines through the dispatcher.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::session::Session;

use super::command::{CommandResult, Outcome};
use super::input::{ReadError, ScriptSource};
use super::registry::CommandRegistry;

/// Holds one script's place on the input stack and in the recursion set,
/// releasing both on drop so a panic mid-replay still unwinds them.
struct ReplayGuard<'a> {
    session: &'a mut Session,
    path: PathBuf,
}

impl Drop for ReplayGuard<'_> {
    fn drop(&mut self) {
        self.session.output.leave_script();
        self.session.input.pop();
        self.session.scripts.remove(&self.path);
    }
}

/// Replay the commands in `raw_path`.
///
/// The path is canonicalized before the recursion check so that the same file
/// reached through different spellings is still refused. Regular output is
/// silenced for the duration; errors and the begin/end markers stay visible.
pub fn execute_script(
    raw_path: &str,
    registry: &CommandRegistry,
    session: &mut Session,
) -> CommandResult {
    let path = match fs::canonicalize(raw_path) {
        Ok(path) => path,
        Err(e) => return CommandResult::error(format!("cannot resolve '{raw_path}': {e}")),
    };
    if !path.is_file() {
        return CommandResult::error(format!("'{}' is not a file", path.display()));
    }
    if session.scripts.contains(&path) {
        return CommandResult::error(format!(
            "script recursion refused: '{}' is already running",
            path.display()
        ));
    }
    let source = match ScriptSource::open(&path) {
        Ok(source) => Box::new(source),
        Err(e) => return CommandResult::error(format!("cannot open '{}': {e}", path.display())),
    };

    debug!(path = %path.display(), "replaying script");
    session.scripts.insert(path.clone());
    session.input.push(source);
    session
        .output
        .notice(&format!("--- running script '{}' ---", path.display()));
    session.output.enter_script();

    let result = {
        let guard = ReplayGuard {
            session: &mut *session,
            path: path.clone(),
        };
        replay(registry, &mut *guard.session)
    };

    session
        .output
        .notice(&format!("--- finished script '{}' ---", path.display()));

    result
}

/// Drain the active source, dispatching each line. Blank lines and lines
/// starting with '#' are skipped. An interrupted command stops the replay
/// and propagates, so enclosing scripts stop too.
fn replay(registry: &CommandRegistry, session: &mut Session) -> CommandResult {
    loop {
        let line = match session.input.read_line("") {
            Ok(line) => line,
            Err(ReadError::Eof) => return CommandResult::ok(),
            Err(ReadError::Interrupted) => {
                return CommandResult::interrupted("script replay interrupted")
            }
            Err(ReadError::Failed(e)) => {
                return CommandResult::error(format!("script read failed: {e}"))
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(result) = super::dispatch(trimmed, registry, session) {
            if result.outcome == Outcome::Interrupted {
                // Rendered once by the outermost caller.
                return result;
            }
            super::render(&result, &session.output);
        }
        if !session.running {
            return CommandResult::ok();
        }
    }
}
