//! Input validation rules shared by the add and update operations.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Maximum comment length, in characters.
pub const COMMENT_MAX_LEN: usize = 20;

/// Personal ID format: six digits, a dash, four digits.
static PERSONAL_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}-[0-9]{4}$").expect("personal ID pattern is valid"));

/// Validation failures. These never change stored state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Personal ID already registered: {0}")]
    DuplicatePersonalId(String),

    #[error("Malformed personal ID '{0}' (expected YYMMDD-XXXX)")]
    MalformedPersonalId(String),

    #[error("Unknown affiliation '{0}' (allowed: unregistered, group-a, group-b, group-c, group-d)")]
    UnknownAffiliation(String),

    #[error("Unknown column '{label}'{}", suggestion_suffix(.suggestion))]
    UnknownColumn {
        label: String,
        suggestion: Option<&'static str>,
    },

    #[error("No patient with personal ID {0}")]
    UnknownPersonalId(String),

    #[error("{0} must not be empty")]
    EmptyName(&'static str),

    #[error("Comment is {len} characters long (max {})", COMMENT_MAX_LEN)]
    CommentTooLong { len: usize },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(s) => format!(", did you mean '{}'?", s),
        None => String::new(),
    }
}

/// Check a personal ID against the `YYMMDD-XXXX` format.
pub fn is_valid_personal_id(id: &str) -> bool {
    PERSONAL_ID_PATTERN.is_match(id)
}

/// Trim and check a personal ID, returning it ready for storage.
pub fn validate_personal_id(id: &str) -> ValidationResult<String> {
    let id = id.trim();
    if is_valid_personal_id(id) {
        Ok(id.to_string())
    } else {
        Err(ValidationError::MalformedPersonalId(id.to_string()))
    }
}

/// Trim, require non-empty and uppercase a name field.
pub fn validate_name(field: &'static str, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyName(field));
    }
    Ok(value.to_uppercase())
}

/// Trim, uppercase and length-check a comment. Empty comments are allowed.
///
/// The limit applies to the stored (uppercased) text, which can be longer
/// than the input (`ß` becomes `SS`).
pub fn validate_comment(value: &str) -> ValidationResult<String> {
    let upper = value.trim().to_uppercase();
    let len = upper.chars().count();
    if len > COMMENT_MAX_LEN {
        return Err(ValidationError::CommentTooLong { len });
    }
    Ok(upper)
}
