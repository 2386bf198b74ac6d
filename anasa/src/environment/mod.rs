use std::sync::Arc;

use anasa_api_rest::{RestServerConfig, RestServerRealIpConfig};
use anasa_config::Config;
use anasa_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use anasa_core_health_impl::{HealthFeatureConfig, HealthFeatureServiceImpl};
use anasa_core_newsletter_impl::{NewsletterFeatureConfig, NewsletterFeatureServiceImpl};
use anyhow::Context;
use types::{Email, RestServer, Template, Time};

pub mod types;

/// Builds the services of the relay from the configuration and the
/// infrastructure connections.
#[derive(Debug)]
pub struct Provider {
    config: ConfigProvider,
    email: Email,
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self { config, email }
    }

    pub fn rest_server(self) -> anyhow::Result<RestServer> {
        let time = Time::default();
        let template = Template::new().context("Failed to load email templates")?;

        // Core
        let health = HealthFeatureServiceImpl::new(
            time,
            self.email.clone(),
            self.config.health_feature_config,
        );
        let contact = ContactFeatureServiceImpl::new(
            template.clone(),
            self.email.clone(),
            self.config.contact_feature_config,
        );
        let newsletter = NewsletterFeatureServiceImpl::new(
            time,
            template,
            self.email,
            self.config.newsletter_feature_config,
        );

        Ok(RestServer::new(
            health,
            contact,
            newsletter,
            self.config.rest_server_config,
        ))
    }
}

/// Service configurations derived from the [`Config`]
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    // API
    rest_server_config: RestServerConfig,

    // Core
    contact_feature_config: ContactFeatureConfig,
    health_feature_config: HealthFeatureConfig,
    newsletter_feature_config: NewsletterFeatureConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        // API
        let rest_server_config = RestServerConfig {
            addr: config.http.address,
            real_ip_config: config.http.real_ip.as_ref().map(|real_ip_config| {
                Arc::new(RestServerRealIpConfig {
                    header: real_ip_config.header.clone(),
                    set_from: real_ip_config.set_from,
                })
            }),
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            recipient: config.contact.recipient.clone().into(),
            subject_prefix: config.contact.subject_prefix.as_str().into(),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        let newsletter_feature_config = NewsletterFeatureConfig {
            sender: config.newsletter.sender.clone().into(),
            notification_recipient: config.newsletter.notification_recipient.clone().into(),
            notification_policy: config.newsletter.notification_policy,
        };

        Self {
            rest_server_config,
            contact_feature_config,
            health_feature_config,
            newsletter_feature_config,
        }
    }
}
