use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::{from_fn, Next},
    Router,
};
use tracing::{debug, warn};

use crate::RestServerRealIpConfig;

pub fn add<S: Clone + Send + Sync + 'static>(
    real_ip_config: Option<Arc<RestServerRealIpConfig>>,
) -> impl FnOnce(Router<S>) -> Router<S> {
    |router| {
        router.layer(from_fn(move |mut request: Request, next: Next| {
            let peer = request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip());
            if let Some(peer) = peer {
                let ip = resolve(peer, request.headers(), real_ip_config.as_deref());
                request.extensions_mut().insert(ClientIp(ip));
            }
            next.run(request)
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientIp(pub IpAddr);

/// The real ip header is only trusted on requests from the configured reverse
/// proxy. If the header holds a list (like `X-Forwarded-For`), the last entry
/// is the one appended by the proxy.
fn resolve(peer: IpAddr, headers: &HeaderMap, config: Option<&RestServerRealIpConfig>) -> IpAddr {
    let Some(config) = config else {
        return peer;
    };

    let value = headers.get(&config.header);

    if config.set_from != peer {
        if value.is_some() {
            debug!(%peer, header = %config.header, "ignoring real ip header from untrusted peer");
        }
        return peer;
    }

    let Some(value) = value else {
        warn!(%peer, header = %config.header, "real ip header missing");
        return peer;
    };

    value
        .to_str()
        .ok()
        .and_then(|value| value.rsplit(',').next())
        .and_then(|ip| ip.trim().parse().ok())
        .unwrap_or_else(|| {
            warn!(%peer, ?value, "invalid real ip header");
            peer
        })
}
