//! Patient Registry Core Library
//!
//! Single-user patient records kept in one local SQLite table.
//!
//! # Architecture
//!
//! ```text
//! Form input → Registry (validation) → Database → patients table
//!                                          │
//!                        List / refresh ◄──┘
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite data access (insert, list, update one column, delete)
//! - [`models`]: Domain types (PatientRecord, Affiliation, UpdateField) and validation
//! - [`registry`]: Controller that validates input before touching storage

pub mod db;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use db::{Database, DbError, DbResult};
pub use models::{
    Affiliation, NewPatient, PatientRecord, UpdateField, ValidationError, COMMENT_MAX_LEN,
};
pub use registry::{Registry, RegistryError, RegistryResult};
