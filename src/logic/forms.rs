//! Form state and validation
//!
//! Sign-in, create and edit dialogs are all a short list of text inputs with
//! a required-field check on submit. Validation failures stay in the form as
//! an inline message; nothing is sent.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    /// Rendered as bullets
    pub secret: bool,
}

impl FormField {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            value: String::new(),
            required: false,
            secret: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn display_value(&self) -> String {
        if self.secret {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focused: usize,
    /// Inline validation message
    pub error: Option<String>,
    pub submitting: bool,
}

impl FormState {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            fields,
            focused: 0,
            error: None,
            submitting: false,
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

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
            self.error = None;
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    /// Value of a field as it should be sent; `None` if absent or blank
    ///
    /// Plain fields are trimmed. Secret fields are returned exactly as typed.
    pub fn value(&self, key: &str) -> Option<String> {
        self.submitted(key).filter(|v| !v.is_empty())
    }

    /// Like `value`, but a field the user emptied comes back as `""`
    ///
    /// Edit forms send this so a cleared field overwrites the old value.
    pub fn value_or_empty(&self, key: &str) -> Option<String> {
        self.submitted(key)
    }

    fn submitted(&self, key: &str) -> Option<String> {
        self.fields.iter().find(|f| f.key == key).map(|f| {
            if f.secret {
                f.value.clone()
            } else {
                f.value.trim().to_string()
            }
        })
    }

    /// Check required fields; on failure record the message and focus the field
    ///
    /// # Examples
    /// ```
    /// use rackdesk::logic::forms::{FormField, FormState};
    ///
    /// let mut form = FormState::new("Sign In", vec![
    ///     FormField::new("email", "Email").required(),
    ///     FormField::new("password", "Password").required().secret(),
    /// ]);
    /// assert!(form.validate().is_err());
    /// assert_eq!(form.error.as_deref(), Some("Email is required"));
    /// ```
    pub fn validate(&mut self) -> Result<(), String> {
        let missing = self
            .fields
            .iter()
            .position(|f| f.required && f.value.trim().is_empty());

        match missing {
            Some(idx) => {
                let message = format!("{} is required", self.fields[idx].label);
                self.focused = idx;
                self.error = Some(message.clone());
                Err(message)
            }
            None => {
                self.error = None;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rack_form() -> FormState {
        FormState::new(
            "New Rack Slot",
            vec![
                FormField::new("rack", "Rack").required(),
                FormField::new("slot", "Slot").required(),
                FormField::new("status", "Status"),
            ],
        )
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = rack_form();
        form.push_char('A');
        form.focus_next();
        form.push_char('1');
        form.push_char('2');
        form.pop_char();

        assert_eq!(form.value("rack").as_deref(), Some("A"));
        assert_eq!(form.value("slot").as_deref(), Some("1"));
        assert_eq!(form.value("status"), None);
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = rack_form();
        form.focus_prev();
        assert_eq!(form.focused, 2);
        form.focus_next();
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn test_validate_focuses_first_missing_field() {
        let mut form = rack_form();
        form.push_char('B');
        form.focus_next();
        form.focus_next();

        assert_eq!(form.validate(), Err("Slot is required".to_string()));
        assert_eq!(form.focused, 1);
    }

    #[test]
    fn test_whitespace_does_not_satisfy_required() {
        let mut form = rack_form();
        form.fields[0].value = "   ".to_string();
        form.fields[1].value = "4".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = rack_form();
        let _ = form.validate();
        assert!(form.error.is_some());
        form.push_char('C');
        assert!(form.error.is_none());
    }

    #[test]
    fn test_secret_value_is_not_trimmed() {
        let mut form = FormState::new(
            "Sign In",
            vec![
                FormField::new("email", "Email").required(),
                FormField::new("password", "Password").required().secret(),
            ],
        );
        for c in " ops@example.com ".chars() {
            form.push_char(c);
        }
        form.focus_next();
        for c in " pass ".chars() {
            form.push_char(c);
        }

        assert_eq!(form.value("email").as_deref(), Some("ops@example.com"));
        assert_eq!(form.value("password").as_deref(), Some(" pass "));
    }

    #[test]
    fn test_cleared_field_is_sent_as_empty() {
        let mut form = FormState::new(
            "Edit User",
            vec![
                FormField::new("name", "Name").required().with_value("Ravi"),
                FormField::new("phone", "Phone").with_value("98"),
            ],
        );
        form.focus_next();
        form.pop_char();
        form.pop_char();

        assert_eq!(form.value("phone"), None);
        assert_eq!(form.value_or_empty("phone").as_deref(), Some(""));
        assert_eq!(form.value_or_empty("missing"), None);
    }

    #[test]
    fn test_secret_display() {
        let field = FormField::new("password", "Password").secret().with_value("hunter2");
        assert_eq!(field.display_value(), "•••••••");
    }
}
