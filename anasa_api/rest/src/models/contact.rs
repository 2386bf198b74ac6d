use anasa_models::contact::{ContactMessage, ContactMessageAuthor};
use serde::Deserialize;

use super::{required, MissingFieldError};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactMessage {
    /// Full name of the sender
    #[serde(default)]
    pub name: Option<String>,
    /// Email address of the sender
    #[serde(default)]
    pub email: Option<String>,
    /// Subject of the message
    #[serde(default)]
    pub subject: Option<String>,
    /// Content of the message
    #[serde(default)]
    pub message: Option<String>,
}

impl TryFrom<ApiContactMessage> for ContactMessage {
    type Error = MissingFieldError;

    fn try_from(value: ApiContactMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            author: ContactMessageAuthor {
                name: required(value.name)?,
                email: required(value.email)?,
            },
            subject: required(value.subject)?,
            content: required(value.message)?,
        })
    }
}
