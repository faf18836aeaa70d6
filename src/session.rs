//! Mutable state threaded through every command.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::collection::PersonCollection;
use crate::error::CensusError;
use crate::repl::input::{InputStack, InteractiveSource};
use crate::repl::output::OutputSink;
use crate::storage::FileStore;

/// Everything a command may touch: the collection, the backing store, the
/// input stack, the output sink, and the set of scripts currently replaying.
pub struct Session {
    pub collection: PersonCollection,
    pub store: FileStore,
    pub input: InputStack,
    pub output: OutputSink,
    /// Canonical paths of scripts on the replay stack, for recursion refusal.
    pub scripts: HashSet<PathBuf>,
    pub running: bool,
}

impl Session {
    /// A session driven by the terminal.
    pub fn interactive(
        collection: PersonCollection,
        store: FileStore,
    ) -> Result<Self, CensusError> {
        let mut input = InputStack::new();
        input.push(Box::new(InteractiveSource::new()?));
        Ok(Self {
            collection,
            store,
            input,
            output: OutputSink::new(),
            scripts: HashSet::new(),
            running: true,
        })
    }

    /// A session with no input source attached. Callers push script sources
    /// themselves; reads against the empty stack fail rather than block.
    pub fn headless(collection: PersonCollection, store: FileStore) -> Self {
        Self {
            collection,
            store,
            input: InputStack::new(),
            output: OutputSink::new(),
            scripts: HashSet::new(),
            running: true,
        }
    }
}
