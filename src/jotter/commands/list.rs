use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JotterError, Result};
use crate::store::NoteStore;

/// Lists note names.
///
/// An empty store and a missing save directory both yield no names, but
/// with different messages so the two cases can be told apart.
pub fn run<S: NoteStore>(store: &S) -> Result<CmdResult> {
    let names = match store.list() {
        Ok(names) => names,
        Err(e @ JotterError::MissingSaveDir(_)) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(e.to_string()));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    let mut result = CmdResult::default();
    if names.is_empty() {
        result.add_message(CmdMessage::info("No files found."));
    }
    Ok(result.with_listed_names(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::TempDir;

    #[test]
    fn lists_all_names() {
        let fixture = StoreFixture::new().with_note("a", "").with_note("b", "");
        let result = run(&fixture.store).unwrap();
        assert_eq!(result.listed_names, vec!["a", "b"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_reports_no_files() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store).unwrap();
        assert!(result.listed_names.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "No files found.");
    }

    #[test]
    fn missing_directory_is_reported_distinctly() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("gone"));
        let result = run(&store).unwrap();

        assert!(result.listed_names.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0]
            .content
            .starts_with("ERROR: Could not find save directory"));
    }
}
