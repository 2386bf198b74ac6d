use std::future::Future;

use anasa_models::newsletter::NewsletterSubscription;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NewsletterFeatureService: Send + Sync + 'static {
    /// Send a confirmation email to the subscriber and notify the newsletter
    /// team about the new subscription.
    ///
    /// Both emails are always attempted, even if one of them fails. An
    /// unparsable subscriber address counts as a failed confirmation.
    fn subscribe(
        &self,
        subscription: NewsletterSubscription,
    ) -> impl Future<Output = Result<(), NewsletterSubscribeError>> + Send;
}

#[derive(Debug, Error)]
pub enum NewsletterSubscribeError {
    #[error("Failed to send the confirmation email.")]
    Confirmation,
    #[error("Failed to send the subscription notification.")]
    Notification,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockNewsletterFeatureService {
    pub fn with_subscribe(
        mut self,
        subscription: NewsletterSubscription,
        result: Result<(), NewsletterSubscribeError>,
    ) -> Self {
        self.expect_subscribe()
            .once()
            .with(mockall::predicate::eq(subscription))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
