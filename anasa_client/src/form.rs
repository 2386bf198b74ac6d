use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::celebration::Celebration;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// A form whose draft is sent to one of the relay endpoints.
pub trait Form: Serialize + Send + Sync {
    /// Path of the relay endpoint, relative to the base url of the site.
    const ENDPOINT: &'static str;
    /// Shown when a submission fails and the server did not say why.
    const FALLBACK_ERROR: &'static str;
    const SUCCESS_MESSAGE: &'static str;

    /// Check the draft before anything is sent.
    ///
    /// Returns the message to show to the user if the draft is incomplete.
    fn validate(&self) -> Result<(), &'static str>;

    /// Clear all fields.
    fn reset(&mut self);

    fn celebration() -> Celebration;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let target = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *target = value.into();
    }
}

impl Form for ContactDraft {
    const ENDPOINT: &'static str = "/api/contact";
    const FALLBACK_ERROR: &'static str = "Failed to send message";
    const SUCCESS_MESSAGE: &'static str = "Message sent successfully!";

    fn validate(&self) -> Result<(), &'static str> {
        if [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err("All fields are required");
        }
        validate_email(&self.email)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn celebration() -> Celebration {
        Celebration::contact()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsletterDraft {
    pub email: String,
}

impl NewsletterDraft {
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }
}

impl Form for NewsletterDraft {
    const ENDPOINT: &'static str = "/api/newsletter/subscribe";
    const FALLBACK_ERROR: &'static str = "Subscription failed";
    const SUCCESS_MESSAGE: &'static str = "Thank you for subscribing!";

    fn validate(&self) -> Result<(), &'static str> {
        if self.email.is_empty() {
            return Err("Email is required");
        }
        validate_email(&self.email)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn celebration() -> Celebration {
        Celebration::newsletter()
    }
}

fn validate_email(email: &str) -> Result<(), &'static str> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(INVALID_EMAIL)
    }
}
