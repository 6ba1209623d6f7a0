//! Per-IP rate limiting using a token bucket.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type IpGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Public pages and JSON endpoints: 2 requests per second, burst 100.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The key is
/// the peer socket address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> IpGovernorLayer {
    governor_layer(2, 100)
}

/// Form endpoints (registration, login): 1 request per second, burst 10.
///
/// Each registration submit fans out to the backend and the identity
/// provider, so these routes get the tighter bucket.
pub fn secure_layer() -> IpGovernorLayer {
    governor_layer(1, 10)
}

fn governor_layer(per_second: u64, burst_size: u32) -> IpGovernorLayer {
    let config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(config)
}
