use crate::commands::{CmdMessage, CmdResult};
use crate::model::Note;
use crate::store::NoteStore;
use log::{info, warn};

/// Persists a note, replacing whatever was stored under its name.
///
/// A failed write is reported as an error message rather than an `Err`,
/// so the caller can carry on with the session.
pub fn run<S: NoteStore>(store: &mut S, note: &Note) -> CmdResult {
    let mut result = CmdResult::default();

    match store.save(note) {
        Ok(()) => {
            info!("saved note {}", note.name);
            result.add_message(CmdMessage::success(format!(
                "{} successfully saved!",
                note.name
            )));
        }
        Err(e) => {
            warn!("failed to save note {}: {}", note.name, e);
            result.add_message(CmdMessage::error(format!(
                "ERROR: {} failed to save.",
                note.name
            )));
        }
    }

    result
}
