//! Input sources: where the next line of text comes from.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::CensusError;

/// Why a read produced no line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The active source has no more input (end of file, or Ctrl-D).
    Eof,
    /// The read was interrupted by the operator (Ctrl-C).
    Interrupted,
    /// The source failed and cannot produce further lines.
    Failed(String),
}

/// A source of command and data-entry lines.
///
/// Command implementations read through the [`InputStack`] and never know
/// whether a human or a script is driving them.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError>;

    /// Called once when the session ends; sources may flush state here.
    fn close(&mut self) {}
}

/// Line-editing terminal input with persistent history.
pub struct InteractiveSource {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl InteractiveSource {
    pub fn new() -> Result<Self, CensusError> {
        let mut editor =
            DefaultEditor::new().map_err(|e| CensusError::Terminal(e.to_string()))?;
        let history_path = dirs::home_dir().map(|home| home.join(".census_history"));
        if let Some(path) = &history_path {
            // A missing history file is normal on first run.
            let _ = editor.load_history(path);
        }
        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl InputSource for InteractiveSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(line)
            }
            Err(ReadlineError::Eof) => Err(ReadError::Eof),
            Err(ReadlineError::Interrupted) => Err(ReadError::Interrupted),
            Err(e) => Err(ReadError::Failed(e.to_string())),
        }
    }

    fn close(&mut self) {
        if let Some(path) = &self.history_path {
            let _ = self.editor.save_history(path);
        }
    }
}

/// Replays the lines of a script file, echoing each consumed line so replay
/// stays auditable.
pub struct ScriptSource {
    lines: Lines<BufReader<File>>,
}

impl ScriptSource {
    pub fn open(path: &Path) -> Result<Self, CensusError> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl InputSource for ScriptSource {
    fn read_line(&mut self, _prompt: &str) -> Result<String, ReadError> {
        match self.lines.next() {
            Some(Ok(line)) => {
                println!("{} {}", "»".dimmed(), line.dimmed());
                Ok(line)
            }
            Some(Err(e)) => Err(ReadError::Failed(e.to_string())),
            None => Err(ReadError::Eof),
        }
    }
}

/// Last-in-first-out stack of input sources; the top source is active.
#[derive(Default)]
pub struct InputStack {
    sources: Vec<Box<dyn InputSource>>,
}

impl InputStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: Box<dyn InputSource>) {
        self.sources.push(source);
    }

    pub fn pop(&mut self) -> Option<Box<dyn InputSource>> {
        self.sources.pop()
    }

    pub fn depth(&self) -> usize {
        self.sources.len()
    }

    /// Read one line from the active source. An empty stack is an error
    /// state, not end-of-input.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, ReadError> {
        match self.sources.last_mut() {
            Some(source) => source.read_line(prompt),
            None => Err(ReadError::Failed("no active input source".into())),
        }
    }

    pub fn close_all(&mut self) {
        for source in &mut self.sources {
            source.close();
        }
    }
}
