//! Labelled text inputs for the data pages.

use patient_registry_core::COMMENT_MAX_LEN;

use crate::page::Page;

/// A single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    /// Characters past this length are ignored
    pub max_len: Option<usize>,
}

impl InputField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            max_len: None,
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Append a character unless the field is full.
    pub fn push(&mut self, c: char) {
        if let Some(max) = self.max_len {
            if self.value.chars().count() >= max {
                return;
            }
        }
        self.value.push(c);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// An ordered group of inputs with one focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<InputField>,
    pub focused: usize,
}

impl Form {
    pub fn new(fields: Vec<InputField>) -> Self {
        Self { fields, focused: 0 }
    }

    /// Inputs for a data page. The list page has no form.
    pub fn for_page(page: Page) -> Option<Self> {
        let personal_id = InputField::new("Personal ID", "YYMMDD-XXXX");
        let fields = match page {
            Page::Add => vec![
                InputField::new("First name", "First name"),
                InputField::new("Last name", "Last name"),
                personal_id,
                InputField::new(
                    "Affiliation",
                    "unregistered, group-a, group-b, group-c, group-d",
                ),
                InputField::new("Comment", "Comment").with_max_len(COMMENT_MAX_LEN),
            ],
            Page::Delete => vec![personal_id],
            Page::Update => vec![
                InputField::new("Column", "first_name, last_name, affiliation, comment"),
                InputField::new("New value", "New value").with_max_len(COMMENT_MAX_LEN),
                personal_id,
            ],
            Page::List => return None,
        };
        Some(Self::new(fields))
    }

    pub fn next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn focused_mut(&mut self) -> Option<&mut InputField> {
        self.fields.get_mut(self.focused)
    }

    /// Current text of every field, in order.
    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    /// Empty every field and focus the first one.
    pub fn clear(&mut self) {
        self.fields.iter_mut().for_each(InputField::clear);
        self.focused = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_len_caps_input() {
        let mut field = InputField::new("Comment", "").with_max_len(3);
        for c in "abcdef".chars() {
            field.push(c);
        }
        assert_eq!(field.value, "abc");
        field.pop();
        assert_eq!(field.value, "ab");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = Form::for_page(Page::Update).unwrap();
        assert_eq!(form.focused, 0);
        form.prev();
        assert_eq!(form.focused, 2);
        form.next();
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn test_clear_resets_values_and_focus() {
        let mut form = Form::for_page(Page::Add).unwrap();
        form.next();
        form.focused_mut().unwrap().push('x');
        form.clear();
        assert!(form.values().iter().all(|v| v.is_empty()));
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn test_page_forms() {
        assert_eq!(Form::for_page(Page::Add).unwrap().fields.len(), 5);
        assert_eq!(Form::for_page(Page::Delete).unwrap().fields.len(), 1);
        assert_eq!(Form::for_page(Page::Update).unwrap().fields.len(), 3);
        assert!(Form::for_page(Page::List).is_none());
    }
}
