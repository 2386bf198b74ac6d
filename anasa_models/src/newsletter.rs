use serde::{Deserialize, Serialize};

use crate::UncheckedEmailAddress;

/// A request to subscribe to the newsletter. Subscriptions are not stored, so
/// submitting the same address twice results in two independent requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSubscription {
    pub email: UncheckedEmailAddress,
}

/// Decides how a failed internal notification affects the outcome of a
/// subscription request. A failed confirmation email always fails the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsletterNotificationPolicy {
    /// The request only succeeds if the notification was sent as well.
    #[default]
    Required,
    /// A failed notification is logged, but not reported to the subscriber.
    BestEffort,
}
