use std::sync::Arc;

use anasa_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use anasa_models::contact::ContactMessage;
use anyhow::anyhow;
use axum::{extract::State, http::StatusCode, response::Response, routing, Router};

use crate::{
    errors::{error, internal_server_error, success},
    extractors::json::ApiJson,
    models::contact::ApiContactMessage,
};

pub const PATH: &str = "/api/contact";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(PATH, routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactFeatureService>>,
    ApiJson(message): ApiJson<ApiContactMessage>,
) -> Response {
    let Ok(message) = ContactMessage::try_from(message) else {
        return error(StatusCode::BAD_REQUEST, "All fields are required");
    };

    match service.send_message(message).await {
        Ok(()) => success("Message sent successfully"),
        Err(ContactSendMessageError::Send) => internal_server_error(
            anyhow!("mail server rejected the contact message"),
            "Failed to send message",
        ),
        Err(ContactSendMessageError::Other(err)) => {
            internal_server_error(err, "Failed to send message")
        }
    }
}
