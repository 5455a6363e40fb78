use serde::Serialize;

use super::forms::{check_email, require, trace_submission, FieldErrors, FormField};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FormField for ContactField {
    fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Email Address",
            ContactField::Phone => "Phone Number",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    fn is_required(self) -> bool {
        matches!(self, ContactField::Name | ContactField::Email | ContactField::Message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn validate(&self) -> FieldErrors<ContactField> {
        let mut errors = FieldErrors::new();
        errors.check(ContactField::Name, require(&self.name, "Name"));
        errors.check(ContactField::Email, check_email(&self.email));
        errors.check(ContactField::Message, require(&self.message, "Message"));
        errors
    }
}

/// Everything the contact page tracks between renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FieldErrors<ContactField>,
    pub submitted: bool,
}

pub enum ContactMsg {
    Edit(ContactField, String),
    Submit,
    SendAnother,
}

impl ContactState {
    pub fn update(&mut self, msg: ContactMsg) {
        match msg {
            ContactMsg::Edit(field, value) => self.edit(field, value),
            ContactMsg::Submit => {
                if let Err(errors) = self.submit() {
                    log::debug!("Contact form has {} invalid field(s)", errors.len());
                }
            }
            ContactMsg::SendAnother => self.submitted = false,
        }
    }

    pub fn edit(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    /// On success the form is emptied and the sent payload handed back.
    pub fn submit(&mut self) -> Result<ContactForm, FieldErrors<ContactField>> {
        let errors = self.form.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        let sent = std::mem::take(&mut self.form);
        trace_submission("contact", &sent);
        self.errors = FieldErrors::new();
        self.submitted = true;
        Ok(sent)
    }
}
