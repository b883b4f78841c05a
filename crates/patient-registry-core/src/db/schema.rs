//! SQLite schema definition.

/// Schema for the patient registry. Safe to run on every open.
///
/// `personal_id` carries no UNIQUE constraint; uniqueness is checked by the
/// registry before inserting.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS patients (
    first_name TEXT,
    last_name TEXT,
    personal_id TEXT,
    affiliation TEXT,
    comment TEXT
);
"#;
