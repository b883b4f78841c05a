//! Registry controller: validates form input and forwards it to the database.
//!
//! Add → duplicate/format/affiliation checks → insert
//! Delete → membership check → delete
//! Update → column allow-list → membership check → value check → update

use thiserror::Error;
use tracing::{info, warn};

use crate::db::{Database, DbError};
use crate::models::{
    validate_comment, validate_name, Affiliation, NewPatient, PatientRecord, UpdateField,
    ValidationError,
};

/// Registry errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Rejected input. Nothing was written.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The database could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] DbError),
}

impl RegistryError {
    /// Whether the error is a recoverable input problem.
    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Validation(_))
    }
}

impl From<rusqlite::Error> for RegistryError {
    fn from(e: rusqlite::Error) -> Self {
        RegistryError::Storage(DbError::Sqlite(e))
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Patient registry over an injected database handle.
pub struct Registry {
    db: Database,
}

impl Registry {
    /// Create a registry that owns the given database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Registry over a fresh in-memory database (for testing).
    pub fn in_memory() -> RegistryResult<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    /// Get the underlying database.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Validate and store a new patient. Returns the stored (uppercased) record.
    pub fn add_patient(&self, patient: &NewPatient) -> RegistryResult<PatientRecord> {
        let existing = self.db.list_personal_ids()?;
        let record = patient.validate(existing.as_slice()).map_err(|e| {
            warn!(error = %e, "rejected new patient");
            e
        })?;

        self.db.insert_patient(&record)?;
        info!(personal_id = %record.personal_id, affiliation = %record.affiliation, "patient added");
        Ok(record)
    }

    /// Delete the patient with this personal ID.
    pub fn delete_patient(&self, personal_id: &str) -> RegistryResult<()> {
        let personal_id = personal_id.trim();
        self.require_known(personal_id)?;

        let removed = self.db.delete_patient(personal_id)?;
        info!(personal_id, removed, "patient deleted");
        Ok(())
    }

    /// Change one column of one patient. Returns the column that changed.
    ///
    /// The label must name an updatable column; the value is checked with the
    /// same rules as the add operation and stored uppercased.
    pub fn update_patient(
        &self,
        column_label: &str,
        new_value: &str,
        personal_id: &str,
    ) -> RegistryResult<UpdateField> {
        let personal_id = personal_id.trim();
        let field = UpdateField::parse(column_label).map_err(|e| {
            warn!(error = %e, "rejected update");
            e
        })?;
        self.require_known(personal_id)?;

        let value = Self::normalize_value(field, new_value).map_err(|e| {
            warn!(error = %e, column = %field, "rejected update");
            e
        })?;

        self.db.update_patient_field(field, &value, personal_id)?;
        info!(personal_id, column = %field, "patient updated");
        Ok(field)
    }

    /// All patients, ordered by affiliation.
    pub fn list_patients(&self) -> RegistryResult<Vec<PatientRecord>> {
        Ok(self.db.list_patients()?)
    }

    /// Number of stored patients.
    pub fn patient_count(&self) -> RegistryResult<usize> {
        Ok(self.db.count_patients()?)
    }

    fn require_known(&self, personal_id: &str) -> RegistryResult<()> {
        let ids = self.db.list_personal_ids()?;
        if ids.iter().any(|id| id == personal_id) {
            Ok(())
        } else {
            let err = ValidationError::UnknownPersonalId(personal_id.to_string());
            warn!(error = %err, "unknown personal ID");
            Err(err.into())
        }
    }

    fn normalize_value(field: UpdateField, value: &str) -> Result<String, ValidationError> {
        match field {
            UpdateField::Affiliation => Ok(Affiliation::parse(value)?.as_stored().to_string()),
            UpdateField::FirstName => validate_name("first_name", value),
            UpdateField::LastName => validate_name("last_name", value),
            UpdateField::Comment => validate_comment(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Registry {
        Registry::in_memory().unwrap()
    }

    fn sandra() -> NewPatient {
        NewPatient::new("Sandra", "Jonson", "330619-4457", "Group-B", "New patient")
    }

    #[test]
    fn test_add_then_list() {
        let registry = setup();
        let stored = registry.add_patient(&sandra()).unwrap();

        let all = registry.list_patients().unwrap();
        assert_eq!(all, vec![stored]);
        assert_eq!(all[0].affiliation, "GROUP-B");
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let registry = setup();
        registry.add_patient(&sandra()).unwrap();

        let mut again = sandra();
        again.first_name = "Other".into();
        let err = registry.add_patient(&again).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(registry.patient_count().unwrap(), 1);
    }

    #[test]
    fn test_delete_unknown_rejected() {
        let registry = setup();
        registry.add_patient(&sandra()).unwrap();

        let err = registry.delete_patient("000000-0000").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::UnknownPersonalId(_))
        ));
        assert_eq!(registry.patient_count().unwrap(), 1);
    }

    #[test]
    fn test_update_affiliation_requires_known_group() {
        let registry = setup();
        registry.add_patient(&sandra()).unwrap();

        let err = registry
            .update_patient("affiliation", "group-z", "330619-4457")
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::UnknownAffiliation(_))
        ));

        registry
            .update_patient("Affiliation", "group-d", "330619-4457")
            .unwrap();
        let updated = registry.database().get_patient("330619-4457").unwrap().unwrap();
        assert_eq!(updated.affiliation, "GROUP-D");
    }

    #[test]
    fn test_update_unknown_id_rejected() {
        let registry = setup();
        let err = registry
            .update_patient("comment", "hello", "330619-4457")
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::UnknownPersonalId(_))
        ));
    }

    #[test]
    fn test_storage_error_is_not_validation() {
        let err: RegistryError = rusqlite::Error::InvalidQuery.into();
        assert!(!err.is_validation());
    }
}
