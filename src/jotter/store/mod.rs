//! # Storage Layer
//!
//! Notes live behind the [`NoteStore`] trait so the command layer never
//! touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per note: `{save_dir}/{name}{ext}`
//!   - Writes go through a temporary file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Storage Format
//!
//! ```text
//! savedNotes/
//! ├── groceries.note
//! └── ideas.note
//! ```
//!
//! Each file holds the note's full content: head line, blank line, body.
//! There is no index file; the directory listing is the index.

use crate::error::Result;
use crate::model::{LoadMode, Note};

pub mod fs;
pub mod memory;

/// Abstract interface for note storage.
///
/// A save always replaces the whole entry; there are no partial writes.
pub trait NoteStore {
    /// Whether an entry exists for `name`
    fn exists(&self, name: &str) -> bool;

    /// Write the note's full content, replacing any existing entry
    fn save(&mut self, note: &Note) -> Result<()>;

    /// Read a note back. `NotFound` if there is no entry.
    fn load(&self, name: &str, mode: LoadMode) -> Result<Note>;

    /// Remove the entry for `name`. `NotFound` if there is none.
    fn delete(&mut self, name: &str) -> Result<()>;

    /// Names of all stored notes, in storage order
    fn list(&self) -> Result<Vec<String>>;
}
