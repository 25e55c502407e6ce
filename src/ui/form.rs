//! Shared text-field machinery for the form screens.
//!
//! Each form state owns a [`FieldSet`]; reducers forward edit intents
//! to it and validators hang their messages on individual fields.

/// Longest value any field accepts.
const MAX_FIELD_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
    /// Render the value masked.
    pub secret: bool,
}

impl Field {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            error: None,
            secret: false,
        }
    }

    pub fn secret(label: &'static str) -> Self {
        Self {
            secret: true,
            ..Self::new(label)
        }
    }
}

/// An ordered set of fields with one focus position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSet {
    fields: Vec<Field>,
    focused: usize,
}

impl FieldSet {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields, focused: 0 }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    /// Replace a field's value wholesale (prefill).
    pub fn set_value(&mut self, index: usize, value: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value;
            field.error = None;
        }
    }

    /// Append a character to the focused field, clearing its error.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.focused) {
            if field.value.chars().count() < MAX_FIELD_LEN {
                field.value.push(c);
            }
            field.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
            field.error = None;
        }
    }

    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focused = index;
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn set_error(&mut self, index: usize, message: &'static str) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(message);
        }
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Apply a validator to one field, recording its message on error.
    /// Returns whether the field passed.
    pub fn check(&mut self, index: usize, validate: impl Fn(&str) -> Result<(), &'static str>) -> bool {
        match validate(self.value(index)) {
            Ok(()) => true,
            Err(message) => {
                self.set_error(index, message);
                false
            }
        }
    }

    /// Move focus to the first field carrying an error.
    pub fn focus_first_error(&mut self) {
        if let Some(index) = self.fields.iter().position(|field| field.error.is_some()) {
            self.focused = index;
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|field| field.error.is_some())
    }
}
