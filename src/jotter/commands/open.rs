use crate::error::{JotterError, Result};
use crate::model::{LoadMode, Note};
use crate::store::NoteStore;
use log::warn;

/// Loads an existing note for append or overwrite editing.
///
/// Any storage failure (missing file, unreadable file, bad head line) is
/// reported uniformly as `LoadFailed` naming the note.
pub fn run<S: NoteStore>(store: &S, name: &str, mode: LoadMode) -> Result<Note> {
    store.load(name, mode).map_err(|e| {
        warn!("failed to load note {}: {}", name, e);
        JotterError::LoadFailed(name.to_string())
    })
}
