//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. The shell talks
//! to notes only through [`NotesApi`]; it never sees the store directly.
//!
//! The facade does not validate names. Validation belongs to command parsing
//! in the shell, which has to reject bad names even for commands it does not
//! recognize.
//!
//! `NotesApi<S: NoteStore>` is generic over the storage backend:
//! - Production: `NotesApi<FileStore>`
//! - Testing: `NotesApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{LoadMode, Note};
use crate::store::NoteStore;

/// The main API facade for note operations.
pub struct NotesApi<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NotesApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// A fresh, unsaved note. Fails if the name is taken.
    pub fn create_note(&self, name: &str) -> Result<Note> {
        commands::create::run(&self.store, name)
    }

    pub fn open_note(&self, name: &str, mode: LoadMode) -> Result<Note> {
        commands::open::run(&self.store, name, mode)
    }

    pub fn save_note(&mut self, note: &Note) -> commands::CmdResult {
        commands::save::run(&mut self.store, note)
    }

    pub fn delete_note(&mut self, name: &str) -> commands::CmdResult {
        commands::delete::run(&mut self.store, name)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JotterError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn create_then_save_then_open() {
        let mut api = NotesApi::new(InMemoryStore::new());
        let mut note = api.create_note("foo").unwrap();
        note.append("hello\n");
        assert!(!api.save_note(&note).has_errors());

        let loaded = api.open_note("foo", LoadMode::Append).unwrap();
        assert_eq!(loaded, note);
    }

    #[test]
    fn create_dispatches_exists_check() {
        let api = NotesApi::new(StoreFixture::new().with_note("foo", "").store);
        assert!(matches!(
            api.create_note("foo"),
            Err(JotterError::AlreadyExists(_))
        ));
    }

    #[test]
    fn delete_and_list_dispatch() {
        let mut api = NotesApi::new(StoreFixture::new().with_notes(2).store);
        assert_eq!(api.list_notes().unwrap().listed_names.len(), 2);

        assert!(!api.delete_note("Note 1").has_errors());
        assert_eq!(api.list_notes().unwrap().listed_names, vec!["Note 2"]);
        assert!(!api.store().exists("Note 1"));
    }
}
