//! Rate limiting middleware using token bucket algorithm.
//!
//! Limits are applied per client IP taken from the socket peer address, so
//! the router must be served with `into_make_service_with_connect_info`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type IpGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// `replenish_secs` is the interval after which one unit of quota returns.
fn build(replenish_secs: u64, burst_size: u32) -> IpGovernorLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(replenish_secs)
            .burst_size(burst_size)
            .finish()
            .expect("non-zero rate limiter quota"),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a rate limiter for the AI chat endpoint.
///
/// # Limits
///
/// - **Replenish**: 1 request every 2 seconds
/// - **Burst**: 30 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn layer() -> IpGovernorLayer {
    build(2, 30)
}

/// Creates a stricter rate limiter for endpoints that send email.
///
/// # Limits
///
/// - **Replenish**: 1 request every 6 seconds
/// - **Burst**: 5 requests
///
/// # Example
///
/// ```rust,ignore
/// let auth_routes = api::routes::public_routes().layer(rate_limit::secure_layer());
/// ```
pub fn secure_layer() -> IpGovernorLayer {
    build(6, 5)
}
