//! The window menu.

/// Everything the menu can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    ShowAdd,
    ShowDelete,
    ShowUpdate,
    ShowList,
    EnterFullscreen,
    ExitFullscreen,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::ShowAdd,
        MenuAction::ShowDelete,
        MenuAction::ShowUpdate,
        MenuAction::ShowList,
        MenuAction::EnterFullscreen,
        MenuAction::ExitFullscreen,
        MenuAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ShowAdd => "Add",
            MenuAction::ShowDelete => "Delete",
            MenuAction::ShowUpdate => "Update",
            MenuAction::ShowList => "List",
            MenuAction::EnterFullscreen => "Fullscreen",
            MenuAction::ExitFullscreen => "Restore",
            MenuAction::Quit => "Quit",
        }
    }

    pub fn key_hint(&self) -> &'static str {
        match self {
            MenuAction::ShowAdd => "F1",
            MenuAction::ShowDelete => "F2",
            MenuAction::ShowUpdate => "F3",
            MenuAction::ShowList => "F4",
            MenuAction::EnterFullscreen | MenuAction::ExitFullscreen => "F11",
            MenuAction::Quit => "Ctrl-C",
        }
    }
}

/// Drop-down menu state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    pub open: bool,
    pub selected: usize,
}

impl Menu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn up(&mut self) {
        let len = MenuAction::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % MenuAction::ALL.len();
    }

    pub fn selected_action(&self) -> MenuAction {
        MenuAction::ALL[self.selected % MenuAction::ALL.len()]
    }
}
