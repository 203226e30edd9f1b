use crate::error::{JotterError, Result};
use crate::model::Note;
use crate::store::NoteStore;

/// Prepares a brand-new note for editing.
///
/// Nothing is written here: the note only reaches the store once its
/// editing session ends. Refuses to shadow an existing note.
pub fn run<S: NoteStore>(store: &S, name: &str) -> Result<Note> {
    if store.exists(name) {
        return Err(JotterError::AlreadyExists(name.to_string()));
    }
    Ok(Note::new(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn fresh_note_has_empty_body() {
        let store = InMemoryStore::new();
        let note = run(&store, "foo").unwrap();
        assert_eq!(note.name, "foo");
        assert!(note.body.is_empty());
        assert!(!store.exists("foo"));
    }

    #[test]
    fn existing_name_is_rejected() {
        let fixture = StoreFixture::new().with_note("foo", "hello\n");
        let err = run(&fixture.store, "foo").unwrap_err();
        assert!(matches!(err, JotterError::AlreadyExists(name) if name == "foo"));
    }

    #[test]
    fn second_create_after_save_is_rejected() {
        let mut store = InMemoryStore::new();
        let note = run(&store, "foo").unwrap();
        save::run(&mut store, &note);

        assert!(matches!(
            run(&store, "foo"),
            Err(JotterError::AlreadyExists(_))
        ));
    }
}
