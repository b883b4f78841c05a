//! Terminal front end for the patient registry.
//!
//! A menu switches between four pages (add, delete, update, list). Each data
//! page submits through [`patient_registry_core::Registry`]; the list page
//! reloads only when asked.

pub mod app;
pub mod config;
pub mod form;
pub mod menu;
pub mod page;
pub mod terminal;
pub mod tracing_setup;
pub mod ui;

// Re-export commonly used types
pub use app::{App, Notice, NoticeKind};
pub use config::{Cli, Config};
pub use menu::MenuAction;
pub use page::Page;
