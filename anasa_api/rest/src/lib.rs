use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anasa_core_contact_contracts::ContactFeatureService;
use anasa_core_health_contracts::HealthFeatureService;
use anasa_core_newsletter_contracts::NewsletterFeatureService;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod extractors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact, Newsletter> {
    health: Health,
    contact: Contact,
    newsletter: Newsletter,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
    pub real_ip_config: Option<Arc<RestServerRealIpConfig>>,
}

#[derive(Debug)]
pub struct RestServerRealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

impl<Health, Contact, Newsletter> RestServer<Health, Contact, Newsletter>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
    Newsletter: NewsletterFeatureService,
{
    pub fn new(
        health: Health,
        contact: Contact,
        newsletter: Newsletter,
        config: RestServerConfig,
    ) -> Self {
        Self {
            health,
            contact,
            newsletter,
            config,
        }
    }

    /// Bind to the configured address and serve until the process is stopped.
    pub async fn serve(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(self.config.addr).await?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        info!("Listening on {}", listener.local_addr()?);
        let router = self.router();
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::newsletter::router(self.newsletter.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::client_ip::add(self.config.real_ip_config)(router)
    }
}
