use anasa_models::newsletter::NewsletterSubscription;
use serde::Deserialize;

use super::{required, MissingFieldError};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiNewsletterSubscription {
    #[serde(default)]
    pub email: Option<String>,
}

impl TryFrom<ApiNewsletterSubscription> for NewsletterSubscription {
    type Error = MissingFieldError;

    fn try_from(value: ApiNewsletterSubscription) -> Result<Self, Self::Error> {
        Ok(Self {
            email: required(value.email)?,
        })
    }
}
