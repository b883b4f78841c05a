use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use patient_registry_core::{NewPatient, PatientRecord, Registry, RegistryResult};
use tracing::{debug, error};

use crate::form::Form;
use crate::menu::{Menu, MenuAction};
use crate::page::Page;

/// Severity of a status notice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line message shown under the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Rows shown on the list page. Only reloaded on an explicit refresh.
#[derive(Clone, Debug, Default)]
pub struct PatientTable {
    pub rows: Vec<PatientRecord>,
    pub selected: Option<usize>,
}

impl PatientTable {
    fn replace(&mut self, rows: Vec<PatientRecord>) {
        self.selected = if rows.is_empty() { None } else { Some(0) };
        self.rows = rows;
    }

    fn up(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    fn down(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1).min(self.rows.len().saturating_sub(1)));
        }
    }
}

/// Main application state
pub struct App {
    /// Page currently shown
    pub page: Page,

    /// Window menu
    pub menu: Menu,

    /// Use the whole terminal instead of the fixed-size window
    pub fullscreen: bool,

    pub add_form: Form,
    pub delete_form: Form,
    pub update_form: Form,

    /// List page contents
    pub table: PatientTable,

    /// Stored patient count, refreshed after every submit
    pub patient_count: usize,

    /// Outcome of the last action
    pub notice: Option<Notice>,

    /// Should quit?
    pub should_quit: bool,

    registry: Registry,
}

impl App {
    /// Create the app and load the table once.
    pub fn new(registry: Registry, fullscreen: bool) -> RegistryResult<Self> {
        let mut app = Self {
            page: Page::Add,
            menu: Menu::default(),
            fullscreen,
            add_form: Self::page_form(Page::Add),
            delete_form: Self::page_form(Page::Delete),
            update_form: Self::page_form(Page::Update),
            table: PatientTable::default(),
            patient_count: 0,
            notice: None,
            should_quit: false,
            registry,
        };
        app.table.replace(app.registry.list_patients()?);
        app.patient_count = app.table.rows.len();
        Ok(app)
    }

    fn page_form(page: Page) -> Form {
        Form::for_page(page).unwrap_or_else(|| Form::new(Vec::new()))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Form for the current page, if it has one.
    pub fn current_form(&self) -> Option<&Form> {
        match self.page {
            Page::Add => Some(&self.add_form),
            Page::Delete => Some(&self.delete_form),
            Page::Update => Some(&self.update_form),
            Page::List => None,
        }
    }

    fn current_form_mut(&mut self) -> Option<&mut Form> {
        match self.page {
            Page::Add => Some(&mut self.add_form),
            Page::Delete => Some(&mut self.delete_form),
            Page::Update => Some(&mut self.update_form),
            Page::List => None,
        }
    }

    /// Handle keyboard input.
    ///
    /// Validation failures become an error notice; storage failures are returned.
    pub fn handle_key(&mut self, key: KeyEvent) -> RegistryResult<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        if self.menu.open {
            self.handle_menu_key(key);
            return Ok(());
        }

        match key.code {
            KeyCode::Esc | KeyCode::F(10) => {
                self.menu.toggle();
                return Ok(());
            }
            KeyCode::F(11) => {
                self.fullscreen = !self.fullscreen;
                return Ok(());
            }
            KeyCode::F(n) => {
                if let Some(page) = Page::ALL.into_iter().find(|p| p.shortcut() == n) {
                    self.show(page);
                }
                return Ok(());
            }
            _ => {}
        }

        match self.page {
            Page::List => self.handle_list_key(key),
            Page::Add | Page::Delete | Page::Update => self.handle_form_key(key),
        }
    }

    /// Handle menu keys
    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::F(10) => self.menu.close(),
            KeyCode::Up | KeyCode::Char('k') => self.menu.up(),
            KeyCode::Down | KeyCode::Char('j') => self.menu.down(),
            KeyCode::Enter => {
                let action = self.menu.selected_action();
                self.menu.close();
                self.apply(action);
            }
            _ => {}
        }
    }

    /// Run a menu action
    pub fn apply(&mut self, action: MenuAction) {
        debug!(?action, "menu action");
        match action {
            MenuAction::ShowAdd => self.show(Page::Add),
            MenuAction::ShowDelete => self.show(Page::Delete),
            MenuAction::ShowUpdate => self.show(Page::Update),
            MenuAction::ShowList => self.show(Page::List),
            MenuAction::EnterFullscreen => self.fullscreen = true,
            MenuAction::ExitFullscreen => self.fullscreen = false,
            MenuAction::Quit => self.should_quit = true,
        }
    }

    fn show(&mut self, page: Page) {
        self.page = page;
        self.notice = None;
    }

    /// Handle keys on the add/delete/update pages
    fn handle_form_key(&mut self, key: KeyEvent) -> RegistryResult<()> {
        let Some(form) = self.current_form_mut() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next(),
            KeyCode::BackTab | KeyCode::Up => form.prev(),
            KeyCode::Backspace => {
                if let Some(field) = form.focused_mut() {
                    field.pop();
                }
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => {
                if let Some(field) = form.focused_mut() {
                    field.push(c);
                }
            }
            KeyCode::Enter => return self.submit(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the list page
    fn handle_list_key(&mut self, key: KeyEvent) -> RegistryResult<()> {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => return self.refresh(),
            KeyCode::Up | KeyCode::Char('k') => self.table.up(),
            KeyCode::Down | KeyCode::Char('j') => self.table.down(),
            _ => {}
        }
        Ok(())
    }

    /// Reload the table from the database.
    pub fn refresh(&mut self) -> RegistryResult<()> {
        let rows = self.registry.list_patients()?;
        self.patient_count = rows.len();
        self.notice = Some(Notice::info(format!("Loaded {} patients", rows.len())));
        self.table.replace(rows);
        Ok(())
    }

    /// Submit the current page's form. Inputs are cleared whatever the outcome.
    pub fn submit(&mut self) -> RegistryResult<()> {
        let outcome = match (self.page, self.current_form().map(Form::values)) {
            (Page::Add, Some(values)) => {
                let patient = NewPatient::new(
                    values[0].as_str(),
                    values[1].as_str(),
                    values[2].as_str(),
                    values[3].as_str(),
                    values[4].as_str(),
                );
                self.registry.add_patient(&patient).map(|record| {
                    format!(
                        "Saved {} {} ({})",
                        record.first_name, record.last_name, record.personal_id
                    )
                })
            }
            (Page::Delete, Some(values)) => self
                .registry
                .delete_patient(&values[0])
                .map(|()| format!("Deleted {}", values[0].trim())),
            (Page::Update, Some(values)) => self
                .registry
                .update_patient(&values[0], &values[1], &values[2])
                .map(|field| format!("Updated {} for {}", field, values[2].trim())),
            _ => return self.refresh(),
        };

        if let Some(form) = self.current_form_mut() {
            form.clear();
        }

        match outcome {
            Ok(message) => {
                self.patient_count = self.registry.patient_count()?;
                self.notice = Some(Notice::info(message));
                Ok(())
            }
            Err(e) if e.is_validation() => {
                self.notice = Some(Notice::error(e.to_string()));
                Ok(())
            }
            Err(e) => {
                error!(error = %e, page = ?self.page, "storage failure");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup() -> App {
        App::new(Registry::in_memory().unwrap(), false).unwrap()
    }

    #[test]
    fn test_function_keys_switch_pages() {
        let mut app = setup();
        app.handle_key(press(KeyCode::F(3))).unwrap();
        assert_eq!(app.page, Page::Update);
        app.handle_key(press(KeyCode::F(4))).unwrap();
        assert_eq!(app.page, Page::List);
        app.handle_key(press(KeyCode::F(9))).unwrap();
        assert_eq!(app.page, Page::List);
    }

    #[test]
    fn test_menu_toggles_fullscreen_and_quits() {
        let mut app = setup();
        app.apply(MenuAction::EnterFullscreen);
        assert!(app.fullscreen);
        app.apply(MenuAction::ExitFullscreen);
        assert!(!app.fullscreen);
        app.handle_key(press(KeyCode::F(11))).unwrap();
        assert!(app.fullscreen);
        app.apply(MenuAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = setup();
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        app.handle_key(key).unwrap();
        assert_eq!(app.add_form.fields[0].value, "");
    }

    #[test]
    fn test_modified_chars_not_typed() {
        let mut app = setup();
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL))
            .unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT))
            .unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT))
            .unwrap();
        assert_eq!(app.add_form.fields[0].value, "S");
    }

    #[test]
    fn test_table_scroll_clamped() {
        let mut table = PatientTable::default();
        table.down();
        assert_eq!(table.selected, None);

        let row = PatientRecord {
            first_name: "A".into(),
            last_name: "B".into(),
            personal_id: "000000-0001".into(),
            affiliation: "GROUP-A".into(),
            comment: String::new(),
        };
        table.replace(vec![row.clone(), row]);
        table.down();
        table.down();
        assert_eq!(table.selected, Some(1));
        table.up();
        table.up();
        assert_eq!(table.selected, Some(0));
    }
}
