//! Pages of the registry window.

/// The four pages of the registry window. Exactly one is shown at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// Register a new patient
    Add,

    /// Remove a patient by personal ID
    Delete,

    /// Change one column of a patient
    Update,

    /// Read-only table of all patients
    List,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Add, Page::Delete, Page::Update, Page::List];

    /// Title shown on the page frame and in the status bar
    pub fn title(&self) -> &'static str {
        match self {
            Page::Add => "Add patient",
            Page::Delete => "Delete patient",
            Page::Update => "Update patient",
            Page::List => "Patients",
        }
    }

    /// Keybind hints for the status bar
    pub fn hint(&self) -> &'static str {
        match self {
            Page::List => "r/Enter: refresh | ↑↓: scroll | Esc: menu",
            _ => "Tab/↑↓: field | Enter: save | Esc: menu",
        }
    }

    /// Function key that jumps to this page
    pub fn shortcut(&self) -> u8 {
        match self {
            Page::Add => 1,
            Page::Delete => 2,
            Page::Update => 3,
            Page::List => 4,
        }
    }
}
