use super::NoteStore;
use crate::error::{JotterError, Result};
use crate::model::{LoadMode, Note};

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Entries hold the rendered content, same as a file would, so loads go
/// through the same parsing path as [`super::fs::FileStore`].
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<(String, String)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored content for `name`, as a file would contain it.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, content)| content.as_str())
    }
}

impl NoteStore for InMemoryStore {
    fn exists(&self, name: &str) -> bool {
        self.raw(name).is_some()
    }

    fn save(&mut self, note: &Note) -> Result<()> {
        let content = note.content();
        match self.entries.iter_mut().find(|(n, _)| *n == note.name) {
            Some(entry) => entry.1 = content,
            None => self.entries.push((note.name.clone(), content)),
        }
        Ok(())
    }

    fn load(&self, name: &str, mode: LoadMode) -> Result<Note> {
        let raw = self
            .raw(name)
            .ok_or_else(|| JotterError::NotFound(name.to_string()))?;
        Note::parse(name, raw, mode)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|(n, _)| n != name);
        if self.entries.len() == before {
            return Err(JotterError::NotFound(name.to_string()));
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|(n, _)| n.clone()).collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const FIXTURE_TIMESTAMP: &str = "2024-01-02 [03:04]";

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_note(mut self, name: &str, body: &str) -> Self {
            let mut note = Note::with_timestamp(name, FIXTURE_TIMESTAMP);
            note.append(body);
            self.store.save(&note).unwrap();
            self
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Note {}", i + 1);
                let body = format!("Content for note {}\n", i + 1);
                self = self.with_note(&name, &body);
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn save_then_load() {
        let fixture = StoreFixture::new().with_note("foo", "hello\n");
        let note = fixture.store.load("foo", LoadMode::Append).unwrap();
        assert_eq!(note.timestamp, FIXTURE_TIMESTAMP);
        assert_eq!(note.body, "hello\n");
    }

    #[test]
    fn save_replaces_entry() {
        let mut fixture = StoreFixture::new().with_note("foo", "one\n");
        let mut note = Note::with_timestamp("foo", FIXTURE_TIMESTAMP);
        note.append("two\n");
        fixture.store.save(&note).unwrap();

        assert_eq!(fixture.store.list().unwrap(), vec!["foo".to_string()]);
        assert_eq!(
            fixture.store.raw("foo"),
            Some("foo | 2024-01-02 [03:04]\n\ntwo\n")
        );
    }

    #[test]
    fn list_keeps_insertion_order() {
        let fixture = StoreFixture::new().with_notes(3);
        assert_eq!(
            fixture.store.list().unwrap(),
            vec!["Note 1", "Note 2", "Note 3"]
        );
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.delete("ghost"),
            Err(JotterError::NotFound(_))
        ));
    }
}
