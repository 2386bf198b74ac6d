#![allow(dead_code, reason = "shared between test binaries")]

use std::sync::{Arc, Mutex};

use anasa_api_rest::{RestServer, RestServerConfig};
use anasa_core_contact_contracts::ContactFeatureService;
use anasa_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use anasa_core_health_contracts::{HealthFeatureService, MockHealthFeatureService};
use anasa_core_newsletter_contracts::NewsletterFeatureService;
use anasa_core_newsletter_impl::{NewsletterFeatureConfig, NewsletterFeatureServiceImpl};
use anasa_email_contracts::{Email, EmailService};
use anasa_models::newsletter::NewsletterNotificationPolicy;
use anasa_shared_impl::time::TimeServiceImpl;
use anasa_templates_impl::TemplateServiceImpl;
use serde_json::Value;
use tokio::net::TcpListener;

pub const CONTACT_RECIPIENT: &str = "contact@anasatech.com";
pub const NEWSLETTER_SENDER: &str = "newsletter@anasatech.com";
pub const NEWSLETTER_TEAM: &str = "team@anasatech.com";
pub const TRANSPORT_ERROR: &str = "535 5.7.8 Authentication credentials invalid";

/// Mail transport stub recording every attempted email.
#[derive(Debug, Clone, Default)]
pub struct RecordingEmailService {
    sent: Arc<Mutex<Vec<Email>>>,
    fail_for: Option<String>,
}

impl RecordingEmailService {
    /// Fail every email sent to `recipient` with [`TRANSPORT_ERROR`].
    pub fn failing_for(recipient: &str) -> Self {
        Self {
            fail_for: Some(recipient.into()),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

impl EmailService for RecordingEmailService {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let fail = self.fail_for.as_deref() == Some(email.recipient.email());
        self.sent.lock().unwrap().push(email);
        if fail {
            anyhow::bail!(TRANSPORT_ERROR);
        }
        Ok(true)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub fn contact_service(
    email: RecordingEmailService,
) -> ContactFeatureServiceImpl<TemplateServiceImpl, RecordingEmailService> {
    ContactFeatureServiceImpl::new(
        TemplateServiceImpl::new().unwrap(),
        email,
        ContactFeatureConfig {
            recipient: Arc::new(CONTACT_RECIPIENT.parse().unwrap()),
            subject_prefix: "[Anasatech Contact]".into(),
        },
    )
}

pub fn newsletter_service(
    email: RecordingEmailService,
    notification_policy: NewsletterNotificationPolicy,
) -> NewsletterFeatureServiceImpl<TimeServiceImpl, TemplateServiceImpl, RecordingEmailService> {
    NewsletterFeatureServiceImpl::new(
        TimeServiceImpl,
        TemplateServiceImpl::new().unwrap(),
        email,
        NewsletterFeatureConfig {
            sender: Arc::new(NEWSLETTER_SENDER.parse().unwrap()),
            notification_recipient: Arc::new(NEWSLETTER_TEAM.parse().unwrap()),
            notification_policy,
        },
    )
}

/// Serve the real relay services on top of the given transport stub.
pub async fn spawn_relay(
    email: RecordingEmailService,
    notification_policy: NewsletterNotificationPolicy,
) -> TestServer {
    spawn(
        MockHealthFeatureService::new(),
        contact_service(email.clone()),
        newsletter_service(email, notification_policy),
    )
    .await
}

pub async fn spawn(
    health: impl HealthFeatureService,
    contact: impl ContactFeatureService,
    newsletter: impl NewsletterFeatureService,
) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = RestServer::new(
        health,
        contact,
        newsletter,
        RestServerConfig {
            addr,
            real_ip_config: None,
        },
    );
    tokio::spawn(server.serve_on(listener));

    TestServer {
        base_url: format!("http://{addr}"),
        http: reqwest::Client::new(),
    }
}

pub struct TestServer {
    pub base_url: String,
    pub http: reqwest::Client,
}

pub struct TestResponse {
    pub status: u16,
    pub request_id: Option<String>,
    pub body: Value,
    pub text: String,
}

impl TestServer {
    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        TestResponse::read(response).await
    }

    pub async fn post_raw(&self, path: &str, content_type: &str, body: &str) -> TestResponse {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .header("Content-Type", content_type)
            .body(body.to_owned())
            .send()
            .await
            .unwrap();
        TestResponse::read(response).await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .unwrap();
        TestResponse::read(response).await
    }
}

impl TestResponse {
    async fn read(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let request_id = response
            .headers()
            .get("X-Request-Id")
            .map(|value| value.to_str().unwrap().to_owned());
        let text = response.text().await.unwrap();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self {
            status,
            request_id,
            body,
            text,
        }
    }
}
