//! The command capability and its structured result.

use super::registry::CommandRegistry;
use crate::session::Session;

/// How one dispatched command line ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
    /// Data entry was cut short by an interrupt or end-of-input. Reported
    /// like an error interactively; stops the replay of an enclosing script.
    Interrupted,
}

/// Structured result of one command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub outcome: Outcome,
    pub message: Option<String>,
}

impl CommandResult {
    /// Success with nothing to report.
    pub fn ok() -> Self {
        Self {
            outcome: Outcome::Success,
            message: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Success,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Error,
            message: Some(message.into()),
        }
    }

    pub fn interrupted(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Interrupted,
            message: Some(message.into()),
        }
    }
}

/// One REPL verb.
///
/// Implementations are stateless; everything mutable lives in the session.
/// The registry is passed through so verbs like `help` and `execute_script`
/// can reach other commands.
pub trait Command {
    fn run(
        &self,
        args: Option<&str>,
        registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult;

    /// One-line description shown by `help`.
    fn description(&self) -> &'static str;
}
