use crate::commands::{CmdMessage, CmdResult};
use crate::store::NoteStore;
use log::{info, warn};

pub fn run<S: NoteStore>(store: &mut S, name: &str) -> CmdResult {
    let mut result = CmdResult::default();

    match store.delete(name) {
        Ok(()) => {
            info!("deleted note {}", name);
            result.add_message(CmdMessage::success(format!(
                "{} successfully deleted!",
                name
            )));
        }
        Err(e) => {
            warn!("failed to delete note {}: {}", name, e);
            result.add_message(CmdMessage::error(format!(
                "ERROR: {} not found or failed to delete.",
                name
            )));
        }
    }

    result
}
