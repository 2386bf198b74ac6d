//! Delivery against a real smtp server.
//!
//! Requires an smtp4dev instance reachable through the `email.smtp_url` of the
//! loaded config and its web api at `SMTP4DEV_URL`. Run with
//! `cargo test -p anasa_email_impl -- --ignored`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anasa_email_contracts::{ContentType, Email, EmailService};
use anasa_email_impl::EmailServiceImpl;
use anasa_models::email_address::EmailAddressWithName;
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

#[tokio::test]
#[ignore = "requires a running smtp4dev instance"]
async fn contact_message() {
    // Arrange
    let (email, smtp4dev, from) = setup().await;
    let subject = unique_subject("[Anasatech Contact] Demo");

    // Act
    let accepted = email
        .send(Email {
            sender: None,
            recipient: "contact@example.com".parse().unwrap(),
            subject: subject.clone(),
            body: "<p>Hi</p>".into(),
            content_type: ContentType::Html,
            reply_to: Some("Jane Doe <jane@example.com>".parse().unwrap()),
        })
        .await
        .unwrap();

    // Assert
    assert!(accepted);

    let mail = smtp4dev.wait_for(&subject).await;
    assert_eq!(mail.from, from.email());
    assert_eq!(mail.to, "contact@example.com");

    let details = smtp4dev.details(&mail.id).await;
    let reply_to = details.header("Reply-To").unwrap();
    assert!(reply_to.contains("jane@example.com"), "{reply_to}");
    let content_type = details.header("Content-Type").unwrap();
    assert!(content_type.starts_with("text/html"), "{content_type}");
}

#[tokio::test]
#[ignore = "requires a running smtp4dev instance"]
async fn sender_override() {
    // Arrange
    let (email, smtp4dev, _) = setup().await;
    let subject = unique_subject("Welcome to Anasa Tech Newsletter");
    let sender = "Anasa Tech Newsletter <newsletter@example.com>"
        .parse::<EmailAddressWithName>()
        .unwrap();

    // Act
    let accepted = email
        .send(Email {
            sender: Some(sender),
            recipient: "jane@example.com".parse().unwrap(),
            subject: subject.clone(),
            body: "Thank you for subscribing!".into(),
            content_type: ContentType::Text,
            reply_to: None,
        })
        .await
        .unwrap();

    // Assert
    assert!(accepted);

    let mail = smtp4dev.wait_for(&subject).await;
    assert_eq!(mail.from, "newsletter@example.com");
    assert!(smtp4dev.details(&mail.id).await.header("Reply-To").is_none());
}

#[tokio::test]
#[ignore = "requires a running smtp4dev instance"]
async fn ping() {
    let (email, _, _) = setup().await;
    email.ping().await.unwrap();
}

async fn setup() -> (EmailServiceImpl, Smtp4dev, EmailAddressWithName) {
    let config = anasa_config::load().unwrap();

    let email = EmailServiceImpl::new(
        &config.email.smtp_url,
        config.email.from.clone(),
        config.email.timeout.map(Into::into),
    )
    .await
    .unwrap();

    let url = std::env::var("SMTP4DEV_URL")
        .expect("SMTP4DEV_URL is not set")
        .parse()
        .expect("SMTP4DEV_URL is not a valid url");

    let smtp4dev = Smtp4dev {
        url,
        http: reqwest::Client::new(),
    };

    (email, smtp4dev, config.email.from)
}

/// Tests share one mailbox, so every test looks for its own subject.
fn unique_subject(subject: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{subject} #{nanos}")
}

struct Smtp4dev {
    url: Url,
    http: reqwest::Client,
}

impl Smtp4dev {
    async fn wait_for(&self, subject: &str) -> MessageSummary {
        let start = Instant::now();
        while start.elapsed() < Duration::from_secs(5) {
            let messages = self.get::<Page<MessageSummary>>("api/Messages").await;
            if let Some(message) = messages.results.into_iter().find(|m| m.subject == subject) {
                return message;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!("no email with subject {subject:?} received");
    }

    async fn details(&self, id: &str) -> MessageDetails {
        self.get(&format!("api/Messages/{id}")).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> T {
        self.http
            .get(self.url.join(path).unwrap())
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

#[derive(Deserialize)]
struct Page<T> {
    results: Vec<T>,
}

#[derive(Deserialize)]
struct MessageSummary {
    id: String,
    from: String,
    to: String,
    subject: String,
}

#[derive(Deserialize)]
struct MessageDetails {
    headers: Vec<Header>,
}

impl MessageDetails {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(name))
            .map(|header| header.value.as_str())
    }
}

#[derive(Deserialize)]
struct Header {
    name: String,
    value: String,
}
