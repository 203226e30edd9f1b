//! Line-collecting editor session.
//!
//! The session shows the note's head and current body, then appends every
//! line the user types until the sentinel line [`SENTINEL`] (or end of
//! input). The note is then saved in full: head, previous body, new lines.

use crate::api::NotesApi;
use crate::console::Console;
use crate::error::Result;
use crate::model::Note;
use crate::shell::render::print_result;
use crate::store::NoteStore;
use log::{debug, warn};

/// Typed alone on a line, ends the session and saves.
pub const SENTINEL: &str = "!quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Collecting,
    Done,
}

pub struct EditorSession<'a, C: Console> {
    console: &'a mut C,
    state: State,
}

impl<'a, C: Console> EditorSession<'a, C> {
    pub fn new(console: &'a mut C) -> Self {
        Self {
            console,
            state: State::Collecting,
        }
    }

    /// Runs the session on `note`, saves it through `api`, and hands the
    /// final note back.
    pub fn run<S: NoteStore>(mut self, api: &mut NotesApi<S>, mut note: Note) -> Result<Note> {
        self.console.clear_screen()?;
        self.console.println(&note.head())?;
        self.console
            .print(&format!("Type {} on a new line to exit.\n\n", SENTINEL))?;
        self.console.print(&note.body)?;

        let added = self.collect()?;
        debug!("editor collected {} bytes for {}", added.len(), note.name);
        note.append(&added);

        let result = api.save_note(&note);
        if result.has_errors() {
            warn!("editor session for {} ended without a save", note.name);
        }
        print_result(self.console, &result)?;
        Ok(note)
    }

    fn collect(&mut self) -> Result<String> {
        let mut added = String::new();
        while self.state == State::Collecting {
            match self.console.read_line()? {
                Some(line) if line == SENTINEL => self.state = State::Done,
                Some(line) => {
                    added.push_str(&line);
                    added.push('\n');
                }
                None => self.state = State::Done,
            }
        }
        Ok(added)
    }
}
