use std::sync::Arc;

use anasa_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use anasa_email_contracts::{ContentType, Email, EmailService};
use anasa_models::{
    contact::ContactMessage,
    email_address::{EmailAddress, EmailAddressWithName},
};
use anasa_templates_contracts::{ContactMessageTemplate, TemplateService};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Template, Email> {
    template: Template,
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub recipient: Arc<EmailAddressWithName>,
    /// Prepended to the subject of every forwarded message, e.g. `[Contact]`
    pub subject_prefix: Arc<str>,
}

impl<Template, Email> ContactFeatureServiceImpl<Template, Email> {
    pub fn new(template: Template, email: Email, config: ContactFeatureConfig) -> Self {
        Self {
            template,
            email,
            config,
        }
    }
}

impl<TemplateS, EmailS> ContactFeatureService for ContactFeatureServiceImpl<TemplateS, EmailS>
where
    TemplateS: TemplateService,
    EmailS: EmailService,
{
    #[tracing::instrument(skip_all, fields(subject = %message.subject))]
    async fn send_message(&self, message: ContactMessage) -> Result<(), ContactSendMessageError> {
        let reply_to = message
            .author
            .email
            .to_email_address()
            .inspect_err(|err| warn!("Sending without Reply-To, author address is invalid: {err}"))
            .ok();

        let body = self.template.render(&ContactMessageTemplate {
            name: message.author.name.to_string(),
            first_name: message.author.name.first_name().into(),
            email: message.author.email.to_string(),
            subject: message.subject.to_string(),
            message: message.content.to_string(),
            reply_url: reply_to
                .as_ref()
                .map(|reply_to| reply_url(reply_to, &message.subject)),
        })?;

        let email = Email {
            sender: None,
            recipient: (*self.config.recipient).clone(),
            subject: format!("{} {}", self.config.subject_prefix, message.subject),
            body,
            content_type: ContentType::Html,
            reply_to: reply_to.map(Into::into),
        };

        if !self.email.send(email).await? {
            return Err(ContactSendMessageError::Send);
        }

        info!("contact message forwarded");

        Ok(())
    }
}

/// `mailto:` link answering a message with the given subject.
fn reply_url(recipient: &EmailAddress, subject: &str) -> String {
    // `form_urlencoded` encodes spaces as `+`, which mail clients do not decode.
    let subject = url::form_urlencoded::byte_serialize(format!("Re: {subject}").as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("mailto:{recipient}?subject={subject}")
}
