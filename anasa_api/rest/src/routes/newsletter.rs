use std::sync::Arc;

use anasa_core_newsletter_contracts::NewsletterFeatureService;
use anasa_models::newsletter::NewsletterSubscription;
use axum::{extract::State, http::StatusCode, response::Response, routing, Router};

use crate::{
    errors::{error, internal_server_error, success},
    extractors::json::ApiJson,
    models::newsletter::ApiNewsletterSubscription,
};

pub const PATH: &str = "/api/newsletter/subscribe";

pub fn router(service: Arc<impl NewsletterFeatureService>) -> Router<()> {
    Router::new()
        .route(PATH, routing::post(subscribe))
        .with_state(service)
}

async fn subscribe(
    service: State<Arc<impl NewsletterFeatureService>>,
    ApiJson(subscription): ApiJson<ApiNewsletterSubscription>,
) -> Response {
    let Ok(subscription) = NewsletterSubscription::try_from(subscription) else {
        return error(StatusCode::BAD_REQUEST, "Email is required");
    };

    match service.subscribe(subscription).await {
        Ok(()) => success("Subscription successful"),
        Err(err) => internal_server_error(err, "Failed to subscribe"),
    }
}
