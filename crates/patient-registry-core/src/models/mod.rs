//! Domain models for the patient registry.

mod affiliation;
mod field;
mod patient;
mod validation;

pub use affiliation::*;
pub use field::*;
pub use patient::*;
pub use validation::*;
