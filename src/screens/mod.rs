//! Screen definitions and mounted screen state

pub mod admin_store;
pub mod profile;
pub mod system_status;

use crate::state::{FieldValue, FormController, FormField, InputKind};
pub use system_status::SystemStatusScreen;

/// A mounted screen
#[derive(Debug)]
pub enum Screen {
    AdminStore(FormScreen),
    SystemStatus(SystemStatusScreen),
    Profile(FormScreen),
}

impl Screen {
    pub fn form(&self) -> Option<&FormScreen> {
        match self {
            Screen::AdminStore(form) | Screen::Profile(form) => Some(form),
            Screen::SystemStatus(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormScreen> {
        match self {
            Screen::AdminStore(form) | Screen::Profile(form) => Some(form),
            Screen::SystemStatus(_) => None,
        }
    }

    /// True while the screen waits on a remote call
    pub fn is_busy(&self) -> bool {
        match self {
            Screen::AdminStore(form) | Screen::Profile(form) => form.controller.is_busy(),
            Screen::SystemStatus(status) => status.is_busy(),
        }
    }
}

/// A form controller plus keyboard focus
#[derive(Debug)]
pub struct FormScreen {
    pub controller: FormController,
    focus: usize,
}

impl FormScreen {
    pub fn new(controller: FormController) -> Self {
        let mut screen = Self {
            controller,
            focus: 0,
        };
        if !screen.is_editable(0) {
            screen.next_field();
        }
        screen
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.controller.state().fields().get(self.focus)
    }

    fn is_editable(&self, index: usize) -> bool {
        self.controller
            .state()
            .fields()
            .get(index)
            .is_some_and(FormField::is_editable)
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.controller.state().len();
        if count == 0 {
            return;
        }
        let mut index = self.focus;
        for _ in 0..count {
            index = if forward {
                (index + 1) % count
            } else {
                (index + count - 1) % count
            };
            if self.is_editable(index) {
                self.focus = index;
                return;
            }
        }
    }

    /// Move to the next editable field (wraps around)
    pub fn next_field(&mut self) {
        self.move_focus(true);
    }

    /// Move to the previous editable field (wraps around)
    pub fn prev_field(&mut self) {
        self.move_focus(false);
    }

    /// Apply a typed character to the focused field
    pub fn type_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let name = field.name;
        let value = match (field.kind, &field.value) {
            (InputKind::ReadOnly, _) => return,
            (InputKind::Checkbox, FieldValue::Flag(checked)) if c == ' ' => {
                FieldValue::Flag(!checked)
            }
            (_, FieldValue::Text(text)) => {
                let mut text = text.clone();
                text.push(c);
                FieldValue::Text(text)
            }
            _ => return,
        };
        self.controller.set_field(name, value);
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if !field.is_editable() {
            return;
        }
        if let FieldValue::Text(text) = &field.value {
            let mut text = text.clone();
            text.pop();
            let name = field.name;
            self.controller.set_field(name, FieldValue::Text(text));
        }
    }
}
