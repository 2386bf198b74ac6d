use std::any::Any;

use axum::{http::StatusCode, response::Response, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::error;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(details, "request handler panicked");

    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
