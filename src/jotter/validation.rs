//! Note name validation.
//!
//! A note name doubles as its file stem, so it must be safe on every
//! platform the notes directory might be synced to:
//! - No `<`, `>`, `:`, `"`, `/`, `\`, `|`, `?` or `*`
//! - Shorter than [`MAX_NAME_LEN`] bytes
//!
//! `|` is also what keeps the head line (`name | timestamp`) unambiguous.

/// Names of this many bytes or more are rejected.
pub const MAX_NAME_LEN: usize = 255;

const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Validates a note name.
///
/// # Examples
/// ```
/// use jotter::validation::validate_name;
///
/// assert!(validate_name("groceries").is_ok());
/// assert!(validate_name("meeting notes 2024-01-02").is_ok());
///
/// assert!(validate_name("a/b").is_err());
/// assert!(validate_name("what?").is_err());
/// assert!(validate_name(&"x".repeat(255)).is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), NameValidationError> {
    if let Some(ch) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
        return Err(NameValidationError::InvalidCharacter(ch));
    }

    if name.len() >= MAX_NAME_LEN {
        return Err(NameValidationError::TooLong(name.len()));
    }

    Ok(())
}

/// Boolean form of [`validate_name`].
pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}

/// Error type for note name validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidationError {
    /// Name contains a character that is unsafe in filenames
    InvalidCharacter(char),
    /// Name is at least `MAX_NAME_LEN` bytes long
    TooLong(usize),
}

impl std::fmt::Display for NameValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameValidationError::InvalidCharacter(ch) => {
                write!(f, "Note name contains invalid character '{}'", ch)
            }
            NameValidationError::TooLong(len) => write!(
                f,
                "Note name is {} bytes long (must be under {})",
                len, MAX_NAME_LEN
            ),
        }
    }
}

impl std::error::Error for NameValidationError {}
