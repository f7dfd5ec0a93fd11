//! Contact form model. Submissions go nowhere yet: they are validated,
//! logged and acknowledged.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactSubject {
    General,
    Import,
    Quote,
    Existing,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 4] = [
        ContactSubject::General,
        ContactSubject::Import,
        ContactSubject::Quote,
        ContactSubject::Existing,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ContactSubject::General => "general",
            ContactSubject::Import => "import",
            ContactSubject::Quote => "quote",
            ContactSubject::Existing => "existing",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subject| subject.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactSubject::General => "General Inquiry",
            ContactSubject::Import => "Import Question",
            ContactSubject::Quote => "Request Quote",
            ContactSubject::Existing => "Existing Order",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("{} is required", .0.label())]
    MissingField(ContactField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Raw form state as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: Option<ContactSubject>,
    pub message: String,
}

/// A form that passed validation, with surrounding whitespace removed.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: ContactSubject,
    pub message: String,
}

impl ContactForm {
    /// Applies the same rules the form controls advertise: name, email,
    /// subject and message are required, phone is optional.
    pub fn validate(&self) -> Result<ContactSubmission, ContactFormError> {
        let name = required(&self.name, ContactField::Name)?;
        let email = required(&self.email, ContactField::Email)?;
        if !looks_like_email(&email) {
            return Err(ContactFormError::InvalidEmail);
        }
        let subject = self
            .subject
            .ok_or(ContactFormError::MissingField(ContactField::Subject))?;
        let message = required(&self.message, ContactField::Message)?;
        let phone = Some(self.phone.trim())
            .filter(|phone| !phone.is_empty())
            .map(str::to_string);

        Ok(ContactSubmission {
            name,
            email,
            phone,
            subject,
            message,
        })
    }
}

fn required(value: &str, field: ContactField) -> Result<String, ContactFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ContactFormError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
