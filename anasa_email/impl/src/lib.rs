use std::time::Duration;

use anasa_email_contracts::{ContentType, Email, EmailService};
use anasa_models::email_address::EmailAddressWithName;
use anyhow::anyhow;
use lettre::{message::header, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, warn};

/// SMTP mail transport. Clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    /// Create a new email service. No connection is established until the first
    /// email is sent or [`EmailService::ping`] is called.
    pub async fn new(
        url: &str,
        from: EmailAddressWithName,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?
            .timeout(timeout)
            .build();

        Ok(Self { from, transport })
    }

    #[cfg(feature = "dummy")]
    pub async fn dummy() -> Self {
        Self::new("smtp://dummy", "dummy@example.com".parse().unwrap(), None)
            .await
            .unwrap()
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let sender = email.sender.unwrap_or_else(|| self.from.clone());
        let mut builder = Message::builder()
            .from(sender.0)
            .to(email.recipient.0)
            .subject(email.subject)
            .header(match email.content_type {
                ContentType::Text => header::ContentType::TEXT_PLAIN,
                ContentType::Html => header::ContentType::TEXT_HTML,
            });
        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(reply_to.0);
        }

        builder.body(email.body).map_err(Into::into)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let recipient = email.recipient.clone();
        let message = self.build_message(email)?;

        let response = self.transport.send(message).await?;
        if response.is_positive() {
            debug!(%recipient, code = %response.code(), "email accepted");
        } else {
            warn!(%recipient, code = %response.code(), message = ?response.message().collect::<Vec<_>>(), "email rejected");
        }

        Ok(response.is_positive())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn sut() -> EmailServiceImpl {
        EmailServiceImpl::new(
            "smtp://localhost:2525",
            "Anasa Tech <noreply@anasatech.com>".parse().unwrap(),
            None,
        )
        .await
        .unwrap()
    }

    fn email() -> Email {
        Email {
            sender: None,
            recipient: "contact@anasatech.com".parse().unwrap(),
            subject: "[Anasatech Contact] Demo".into(),
            body: "<p>Hi</p>".into(),
            content_type: ContentType::Html,
            reply_to: None,
        }
    }

    #[tokio::test]
    async fn default_sender() {
        let message = sut().await.build_message(email()).unwrap();

        let envelope = message.envelope();
        assert_eq!(
            envelope.from().map(ToString::to_string).as_deref(),
            Some("noreply@anasatech.com")
        );
        assert_eq!(
            envelope
                .to()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            ["contact@anasatech.com"]
        );

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Subject: [Anasatech Contact] Demo"));
        assert!(formatted.contains("Content-Type: text/html"));
        assert!(!formatted.contains("Reply-To"));
    }

    #[tokio::test]
    async fn custom_sender_and_reply_to() {
        let email = Email {
            sender: Some("newsletter@anasatech.com".parse().unwrap()),
            reply_to: Some("jane@x.com".parse().unwrap()),
            content_type: ContentType::Text,
            ..email()
        };

        let message = sut().await.build_message(email).unwrap();

        assert_eq!(
            message.envelope().from().map(ToString::to_string).as_deref(),
            Some("newsletter@anasatech.com")
        );
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Reply-To: jane@x.com"));
        assert!(formatted.contains("Content-Type: text/plain"));
    }

    #[tokio::test]
    async fn invalid_url() {
        let result = EmailServiceImpl::new(
            "http://localhost",
            "noreply@anasatech.com".parse().unwrap(),
            None,
        )
        .await;
        assert!(result.is_err());
    }
}
