use anasa_config::Config;
use anasa_email_contracts::EmailService;
use tracing::info;

use crate::{
    email,
    environment::{ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    email.ping().await?;

    let config_provider = ConfigProvider::new(&config);
    let provider = Provider::new(config_provider, email);
    let server = provider.rest_server()?;
    info!("Starting http server on {}", config.http.address);
    server.serve().await
}
