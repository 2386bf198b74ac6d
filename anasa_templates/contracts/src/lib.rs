use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template. All interpolated values are html escaped.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

/// Data of an email body. The fields are available as variables in the
/// template.
pub trait Template: Serialize {
    /// File name of the template. The `.html` suffix enables autoescaping.
    const NAME: &'static str;
}

macro_rules! source {
    ($name:literal) => {
        ($name, include_str!(concat!("../templates/", $name)))
    };
}

/// Sources of all templates as `(name, source)` pairs, including the shared
/// `base.html` layout.
pub const TEMPLATES: &[(&str, &str)] = &[
    source!("base.html"),
    source!("contact_message.html"),
    source!("newsletter_notification.html"),
    source!("newsletter_welcome.html"),
];

impl Template for ContactMessageTemplate {
    const NAME: &'static str = "contact_message.html";
}

impl Template for NewsletterWelcomeTemplate {
    const NAME: &'static str = "newsletter_welcome.html";
}

impl Template for NewsletterNotificationTemplate {
    const NAME: &'static str = "newsletter_notification.html";
}

/// Forwarded contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessageTemplate {
    pub name: String,
    pub first_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Prefilled `mailto:` link for answering the message. Missing if the
    /// author address is invalid.
    pub reply_url: Option<String>,
}

/// Confirmation sent to a new subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterWelcomeTemplate {}

/// Internal notification about a new subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterNotificationTemplate {
    pub email: String,
    pub date: String,
}
