use anasa_core_contact_impl::ContactFeatureServiceImpl;
use anasa_core_health_impl::HealthFeatureServiceImpl;
use anasa_core_newsletter_impl::NewsletterFeatureServiceImpl;
use anasa_email_impl::EmailServiceImpl;
use anasa_shared_impl::time::TimeServiceImpl;
use anasa_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = anasa_api_rest::RestServer<HealthFeature, ContactFeature, NewsletterFeature>;

// Email
pub type Email = EmailServiceImpl;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Email>;
pub type ContactFeature = ContactFeatureServiceImpl<Template, Email>;
pub type NewsletterFeature = NewsletterFeatureServiceImpl<Time, Template, Email>;
