//! Patient models.

use serde::{Deserialize, Serialize};

use super::validation::{validate_comment, validate_name, validate_personal_id};
use super::{Affiliation, ValidationError, ValidationResult};

/// A stored patient row. All text is uppercase once validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientRecord {
    pub first_name: String,
    pub last_name: String,
    /// `YYMMDD-XXXX`, unique across the table
    pub personal_id: String,
    /// Stored form of an [`Affiliation`]
    pub affiliation: String,
    /// At most 20 characters, may be empty
    pub comment: String,
}

impl PatientRecord {
    /// Cells in table column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.first_name,
            &self.last_name,
            &self.personal_id,
            &self.affiliation,
            &self.comment,
        ]
    }
}

/// Raw add-form input, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub personal_id: String,
    pub affiliation: String,
    pub comment: String,
}

impl NewPatient {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        personal_id: impl Into<String>,
        affiliation: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            personal_id: personal_id.into(),
            affiliation: affiliation.into(),
            comment: comment.into(),
        }
    }

    /// Validate against the IDs already stored and build the uppercased record.
    ///
    /// Checks run in order: duplicate ID, ID format, affiliation, names, comment.
    pub fn validate<S: AsRef<str>>(&self, existing_ids: &[S]) -> ValidationResult<PatientRecord> {
        let id = self.personal_id.trim();
        if existing_ids.iter().any(|existing| existing.as_ref() == id) {
            return Err(ValidationError::DuplicatePersonalId(id.to_string()));
        }

        let personal_id = validate_personal_id(id)?;
        let affiliation = Affiliation::parse(&self.affiliation)?;

        Ok(PatientRecord {
            first_name: validate_name("first_name", &self.first_name)?,
            last_name: validate_name("last_name", &self.last_name)?,
            personal_id,
            affiliation: affiliation.as_stored().to_string(),
            comment: validate_comment(&self.comment)?,
        })
    }
}
