use std::sync::Arc;

use anasa_core_newsletter_contracts::{NewsletterFeatureService, NewsletterSubscribeError};
use anasa_email_contracts::{ContentType, Email, EmailService};
use anasa_models::{
    email_address::EmailAddressWithName,
    newsletter::{NewsletterNotificationPolicy, NewsletterSubscription},
};
use anasa_shared_contracts::time::TimeService;
use anasa_templates_contracts::{
    NewsletterNotificationTemplate, NewsletterWelcomeTemplate, TemplateService,
};
use tracing::{error, info, warn};

pub const WELCOME_SUBJECT: &str = "Welcome to Anasa Tech Newsletter";
pub const NOTIFICATION_SUBJECT: &str = "New Newsletter Subscription";

#[derive(Debug, Clone)]
pub struct NewsletterFeatureServiceImpl<Time, Template, Email> {
    time: Time,
    template: Template,
    email: Email,
    config: NewsletterFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct NewsletterFeatureConfig {
    pub sender: Arc<EmailAddressWithName>,
    pub notification_recipient: Arc<EmailAddressWithName>,
    pub notification_policy: NewsletterNotificationPolicy,
}

impl<Time, Template, Email> NewsletterFeatureServiceImpl<Time, Template, Email> {
    pub fn new(
        time: Time,
        template: Template,
        email: Email,
        config: NewsletterFeatureConfig,
    ) -> Self {
        Self {
            time,
            template,
            email,
            config,
        }
    }
}

impl<Time, TemplateS, EmailS> NewsletterFeatureService
    for NewsletterFeatureServiceImpl<Time, TemplateS, EmailS>
where
    Time: TimeService,
    TemplateS: TemplateService,
    EmailS: EmailService,
{
    #[tracing::instrument(skip_all, fields(subscriber = %subscription.email))]
    async fn subscribe(
        &self,
        subscription: NewsletterSubscription,
    ) -> Result<(), NewsletterSubscribeError> {
        let confirmation = match subscription.email.to_email_address() {
            Ok(subscriber) => Some(Email {
                sender: Some((*self.config.sender).clone()),
                recipient: subscriber.into(),
                subject: WELCOME_SUBJECT.into(),
                body: self.template.render(&NewsletterWelcomeTemplate {})?,
                content_type: ContentType::Html,
                reply_to: None,
            }),
            Err(err) => {
                error!("Cannot send confirmation, subscriber address is invalid: {err}");
                None
            }
        };

        let notification = Email {
            sender: Some((*self.config.sender).clone()),
            recipient: (*self.config.notification_recipient).clone(),
            subject: NOTIFICATION_SUBJECT.into(),
            body: self.template.render(&NewsletterNotificationTemplate {
                email: subscription.email.to_string(),
                date: self.time.now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            })?,
            content_type: ContentType::Html,
            reply_to: None,
        };

        let (confirmation, notification) = tokio::join!(
            async move {
                match confirmation {
                    Some(email) => deliver(&self.email, email, "confirmation").await,
                    None => false,
                }
            },
            deliver(&self.email, notification, "notification"),
        );

        match (confirmation, notification, self.config.notification_policy) {
            (false, _, _) => Err(NewsletterSubscribeError::Confirmation),
            (true, false, NewsletterNotificationPolicy::Required) => {
                warn!("confirmation was sent, but the subscription will be reported as failed");
                Err(NewsletterSubscribeError::Notification)
            }
            (true, false, NewsletterNotificationPolicy::BestEffort) => {
                warn!("subscription succeeded without notification");
                Ok(())
            }
            (true, true, _) => {
                info!("subscription succeeded");
                Ok(())
            }
        }
    }
}

/// Send a single email and report whether it was accepted. Failures are logged,
/// not propagated.
async fn deliver(email_service: &impl EmailService, email: Email, kind: &'static str) -> bool {
    let recipient = email.recipient.clone();
    match email_service.send(email).await {
        Ok(true) => true,
        Ok(false) => {
            error!(%recipient, "mail server rejected the {kind} email");
            false
        }
        Err(err) => {
            error!(%recipient, "failed to send {kind} email: {err:#}");
            false
        }
    }
}
