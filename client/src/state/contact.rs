//! Contact form field state.
//!
//! DESIGN
//! ======
//! The form has no delivery path of its own: submitting turns the three fields
//! into a `mailto:` link for the visitor's mail client and clears the form.
//! Whether a mail client actually opens is not observable from the page.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::util::mailto::contact_mailto;

/// Addressable contact form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Value used for the `id`/`name` attributes of the input.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormState {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Whether every field is non-empty. Whitespace counts as content, the
    /// same as the inputs' `required` attribute.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        ContactField::ALL.iter().all(|field| !self.get(*field).is_empty())
    }

    /// Build the `mailto:` link from the current values and reset the form.
    pub fn submit(&mut self) -> String {
        let href = contact_mailto(&self.name, &self.email, &self.message);
        *self = Self::default();
        href
    }
}
