use std::time::Duration;

use axum::{
    extract::{MatchedPath, Request},
    response::Response,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{info, Span};

use super::{client_ip::ClientIp, request_id::request_id};

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(make_span)
            .on_request(())
            .on_response(on_response)
            .on_body_chunk(())
            .on_eos(())
            .on_failure(()),
    )
}

fn make_span(request: &Request) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or(request.uri().path(), MatchedPath::as_str);
    let client_ip = request.extensions().get::<ClientIp>().map(|ip| ip.0);

    tracing::info_span!(
        "http-request",
        method = %request.method(),
        route,
        client_ip = client_ip.map(tracing::field::display),
        request_id = request_id(request),
    )
}

fn on_response(response: &Response, latency: Duration, _span: &Span) {
    info!(status = response.status().as_u16(), ?latency, "request finished");
}
