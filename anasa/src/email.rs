use anasa_config::EmailConfig;
use anasa_email_impl::EmailServiceImpl;
use anyhow::Context;

/// Set up the SMTP transport
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(
        &config.smtp_url,
        config.from.clone(),
        config.timeout.map(Into::into),
    )
    .await
    .context("Failed to connect to SMTP server")
}
