//! Patient database operations.
//!
//! This layer stores what it is given: format and uniqueness checks belong
//! to the registry.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{PatientRecord, UpdateField};

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<PatientRecord> {
    Ok(PatientRecord {
        first_name: row.get(0)?,
        last_name: row.get(1)?,
        personal_id: row.get(2)?,
        affiliation: row.get(3)?,
        comment: row.get(4)?,
    })
}

impl Database {
    /// Append a patient row.
    pub fn insert_patient(&self, patient: &PatientRecord) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO patients (first_name, last_name, personal_id, affiliation, comment)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                patient.first_name,
                patient.last_name,
                patient.personal_id,
                patient.affiliation,
                patient.comment,
            ],
        )?;
        Ok(())
    }

    /// List all patients ordered by affiliation, then insertion order.
    pub fn list_patients(&self) -> DbResult<Vec<PatientRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT first_name, last_name, personal_id, affiliation, comment
            FROM patients
            ORDER BY affiliation ASC, rowid ASC
            "#,
        )?;

        let rows = stmt.query_map([], patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// All stored personal IDs.
    pub fn list_personal_ids(&self) -> DbResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT personal_id FROM patients")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Whether any row has this personal ID.
    pub fn contains_personal_id(&self, personal_id: &str) -> DbResult<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM patients WHERE personal_id = ? LIMIT 1",
                [personal_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Get a patient by personal ID.
    pub fn get_patient(&self, personal_id: &str) -> DbResult<Option<PatientRecord>> {
        self.conn
            .query_row(
                r#"
                SELECT first_name, last_name, personal_id, affiliation, comment
                FROM patients
                WHERE personal_id = ?
                "#,
                [personal_id],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Set one column for the row(s) with this personal ID.
    ///
    /// The column identifier comes from [`UpdateField::column`], never from
    /// caller text. Returns the number of rows changed.
    pub fn update_patient_field(
        &self,
        field: UpdateField,
        value: &str,
        personal_id: &str,
    ) -> DbResult<usize> {
        let sql = format!(
            "UPDATE patients SET {} = ?1 WHERE personal_id = ?2",
            field.column()
        );
        let rows_affected = self.conn.execute(&sql, params![value, personal_id])?;
        Ok(rows_affected)
    }

    /// Delete the row(s) with this personal ID. Returns rows removed.
    pub fn delete_patient(&self, personal_id: &str) -> DbResult<usize> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM patients WHERE personal_id = ?", [personal_id])?;
        Ok(rows_affected)
    }

    /// Number of stored patients.
    pub fn count_patients(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn record(first: &str, id: &str, affiliation: &str) -> PatientRecord {
        PatientRecord {
            first_name: first.into(),
            last_name: "JONSON".into(),
            personal_id: id.into(),
            affiliation: affiliation.into(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let db = setup_db();
        let patient = record("SANDRA", "330619-4457", "GROUP-B");

        db.insert_patient(&patient).unwrap();

        let retrieved = db.get_patient("330619-4457").unwrap().unwrap();
        assert_eq!(retrieved, patient);
        assert!(db.get_patient("000000-0000").unwrap().is_none());
    }

    #[test]
    fn test_list_ordered_by_affiliation() {
        let db = setup_db();
        db.insert_patient(&record("C", "000000-0003", "UNREGISTERED")).unwrap();
        db.insert_patient(&record("A", "000000-0001", "GROUP-B")).unwrap();
        db.insert_patient(&record("B", "000000-0002", "GROUP-A")).unwrap();
        db.insert_patient(&record("D", "000000-0004", "GROUP-A")).unwrap();

        let names: Vec<String> = db
            .list_patients()
            .unwrap()
            .into_iter()
            .map(|p| p.first_name)
            .collect();
        assert_eq!(names, vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_list_personal_ids() {
        let db = setup_db();
        assert!(db.list_personal_ids().unwrap().is_empty());

        db.insert_patient(&record("A", "000000-0001", "GROUP-A")).unwrap();
        db.insert_patient(&record("B", "000000-0002", "GROUP-B")).unwrap();

        let mut ids = db.list_personal_ids().unwrap();
        ids.sort();
        assert_eq!(ids, vec!["000000-0001", "000000-0002"]);
        assert!(db.contains_personal_id("000000-0002").unwrap());
        assert!(!db.contains_personal_id("000000-0003").unwrap());
    }

    #[test]
    fn test_update_single_field() {
        let db = setup_db();
        db.insert_patient(&record("A", "000000-0001", "GROUP-A")).unwrap();
        db.insert_patient(&record("B", "000000-0002", "GROUP-A")).unwrap();

        let changed = db
            .update_patient_field(UpdateField::Comment, "CALLED BACK", "000000-0001")
            .unwrap();
        assert_eq!(changed, 1);

        let updated = db.get_patient("000000-0001").unwrap().unwrap();
        assert_eq!(updated.comment, "CALLED BACK");
        assert_eq!(updated.first_name, "A");
        assert_eq!(updated.affiliation, "GROUP-A");

        let untouched = db.get_patient("000000-0002").unwrap().unwrap();
        assert_eq!(untouched.comment, "");
    }

    #[test]
    fn test_update_missing_id_changes_nothing() {
        let db = setup_db();
        let changed = db
            .update_patient_field(UpdateField::FirstName, "X", "999999-9999")
            .unwrap();
        assert_eq!(changed, 0);
    }

    #[test]
    fn test_update_value_is_bound_not_interpolated() {
        let db = setup_db();
        db.insert_patient(&record("A", "000000-0001", "GROUP-A")).unwrap();

        let hostile = "X'; DROP TABLE patients; --";
        db.update_patient_field(UpdateField::LastName, hostile, "000000-0001")
            .unwrap();

        let updated = db.get_patient("000000-0001").unwrap().unwrap();
        assert_eq!(updated.last_name, hostile);
        assert_eq!(db.count_patients().unwrap(), 1);
    }

    #[test]
    fn test_delete_patient() {
        let db = setup_db();
        db.insert_patient(&record("A", "000000-0001", "GROUP-A")).unwrap();
        db.insert_patient(&record("B", "000000-0002", "GROUP-A")).unwrap();

        assert_eq!(db.delete_patient("000000-0001").unwrap(), 1);
        assert_eq!(db.delete_patient("000000-0001").unwrap(), 0);
        assert_eq!(db.count_patients().unwrap(), 1);
        assert!(db.get_patient("000000-0002").unwrap().is_some());
    }
}
