//! Columns that the update operation is allowed to touch.

use std::fmt;

use super::{ValidationError, ValidationResult};

/// Minimum similarity for offering a column suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// A patient column that can be changed after creation.
///
/// `personal_id` is the row key and is intentionally absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateField {
    FirstName,
    LastName,
    Affiliation,
    Comment,
}

impl UpdateField {
    pub const ALL: [UpdateField; 4] = [
        UpdateField::FirstName,
        UpdateField::LastName,
        UpdateField::Affiliation,
        UpdateField::Comment,
    ];

    /// SQL column identifier. The only source of column names in update queries.
    pub fn column(&self) -> &'static str {
        match self {
            UpdateField::FirstName => "first_name",
            UpdateField::LastName => "last_name",
            UpdateField::Affiliation => "affiliation",
            UpdateField::Comment => "comment",
        }
    }

    /// Parse a user-supplied column label (case-insensitive).
    pub fn parse(label: &str) -> ValidationResult<Self> {
        let wanted = label.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.column() == wanted)
            .ok_or_else(|| ValidationError::UnknownColumn {
                label: label.trim().to_string(),
                suggestion: Self::suggest(&wanted),
            })
    }

    /// Closest allowed label, if any is similar enough.
    fn suggest(wanted: &str) -> Option<&'static str> {
        if wanted.is_empty() {
            return None;
        }

        Self::ALL
            .into_iter()
            .map(|f| (f.column(), strsim::normalized_levenshtein(wanted, f.column())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(column, _)| column)
    }
}

impl fmt::Display for UpdateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
