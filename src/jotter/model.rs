use crate::error::{JotterError, Result};
use chrono::Local;

/// Separator between the name and timestamp in a note's head line.
pub const HEAD_SEPARATOR: &str = " | ";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d [%H:%M]";

/// How an existing note is opened for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Keep the existing body and add to it
    Append,
    /// Discard the existing body, keeping only the head
    Overwrite,
}

/// A named, timestamped text note.
///
/// The stored form is always
///
/// ```text
/// name | timestamp
///
/// body...
/// ```
///
/// The head is rebuilt from `name` and `timestamp` by [`Note::content`], so it
/// can never drift from the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub name: String,
    pub timestamp: String,
    pub body: String,
}

impl Note {
    /// A fresh, empty note stamped with the current local time.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_timestamp(name, current_timestamp())
    }

    pub fn with_timestamp(name: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: timestamp.into(),
            body: String::new(),
        }
    }

    /// The first line of the note, without its newline.
    pub fn head(&self) -> String {
        format!("{}{}{}", self.name, HEAD_SEPARATOR, self.timestamp)
    }

    /// Full stored content: head, blank separator line, body.
    pub fn content(&self) -> String {
        format!("{}\n\n{}", self.head(), self.body)
    }

    /// Adds text to the end of the body.
    pub fn append(&mut self, text: &str) {
        self.body.push_str(text);
    }

    /// Rebuilds a note from its stored content.
    ///
    /// Only the timestamp is taken from the stored head; the name is the one
    /// the note was looked up by. In append mode every line after the blank
    /// separator becomes part of the body, each newline-terminated.
    pub fn parse(name: &str, raw: &str, mode: LoadMode) -> Result<Self> {
        let mut lines = raw.lines();
        let head = lines.next().unwrap_or_default();

        let timestamp = match head.split_once(HEAD_SEPARATOR) {
            Some((_, timestamp)) => timestamp,
            None => return Err(JotterError::MalformedHead(name.to_string())),
        };

        let mut note = Self::with_timestamp(name, timestamp);

        if mode == LoadMode::Append {
            let mut rest = lines.peekable();
            if rest.peek().is_some_and(|line| line.is_empty()) {
                rest.next();
            }
            for line in rest {
                note.body.push_str(line);
                note.body.push('\n');
            }
        }

        Ok(note)
    }
}

/// Local time formatted for a note head, e.g. `2024-03-09 [14:05]`.
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(body: &str) -> Note {
        let mut note = Note::with_timestamp("foo", "2024-01-02 [03:04]");
        note.append(body);
        note
    }

    #[test]
    fn content_starts_with_head_and_blank_line() {
        assert_eq!(note("").content(), "foo | 2024-01-02 [03:04]\n\n");
        assert_eq!(
            note("hi there\n").content(),
            "foo | 2024-01-02 [03:04]\n\nhi there\n"
        );
    }

    #[test]
    fn head_follows_current_fields() {
        let mut n = note("body\n");
        n.name = "bar".to_string();
        assert!(n.content().starts_with("bar | 2024-01-02 [03:04]\n\n"));
    }

    #[test]
    fn new_note_is_empty_and_stamped() {
        let n = Note::new("fresh");
        assert_eq!(n.name, "fresh");
        assert!(n.body.is_empty());
        // "YYYY-MM-DD [HH:MM]"
        assert_eq!(n.timestamp.len(), 18);
        assert_eq!(&n.timestamp[10..12], " [");
        assert!(n.timestamp.ends_with(']'));
    }

    #[test]
    fn parse_append_keeps_body() {
        let raw = "foo | 2024-01-02 [03:04]\n\nhello\nworld\n";
        let n = Note::parse("foo", raw, LoadMode::Append).unwrap();
        assert_eq!(n.timestamp, "2024-01-02 [03:04]");
        assert_eq!(n.body, "hello\nworld\n");
        assert_eq!(n.content(), raw);
    }

    #[test]
    fn parse_overwrite_drops_body() {
        let raw = "foo | 2024-01-02 [03:04]\n\nhello\n";
        let n = Note::parse("foo", raw, LoadMode::Overwrite).unwrap();
        assert_eq!(n.timestamp, "2024-01-02 [03:04]");
        assert!(n.body.is_empty());
        assert_eq!(n.content(), "foo | 2024-01-02 [03:04]\n\n");
    }

    #[test]
    fn parse_terminates_last_line() {
        let raw = "foo | ts\n\nno trailing newline";
        let n = Note::parse("foo", raw, LoadMode::Append).unwrap();
        assert_eq!(n.body, "no trailing newline\n");
    }

    #[test]
    fn parse_keeps_blank_lines_inside_body() {
        let raw = "foo | ts\n\nfirst\n\nthird\n";
        let n = Note::parse("foo", raw, LoadMode::Append).unwrap();
        assert_eq!(n.body, "first\n\nthird\n");
    }

    #[test]
    fn parse_without_separator_line() {
        let raw = "foo | ts\nbody right away\n";
        let n = Note::parse("foo", raw, LoadMode::Append).unwrap();
        assert_eq!(n.body, "body right away\n");
    }

    #[test]
    fn parse_uses_lookup_name_not_stored_name() {
        let raw = "old name | ts\n\nx\n";
        let n = Note::parse("new name", raw, LoadMode::Append).unwrap();
        assert_eq!(n.head(), "new name | ts");
    }

    #[test]
    fn parse_rejects_head_without_separator() {
        let err = Note::parse("foo", "just some text\n", LoadMode::Append).unwrap_err();
        assert!(matches!(err, JotterError::MalformedHead(name) if name == "foo"));

        let err = Note::parse("foo", "", LoadMode::Overwrite).unwrap_err();
        assert!(matches!(err, JotterError::MalformedHead(_)));
    }
}
