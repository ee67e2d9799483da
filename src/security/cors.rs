//! Cross-origin policy.
//!
//! # Design Decisions
//! - Permissive: every origin, method and header, credentials allowed
//! - Suitable for internal deployments only; put a stricter proxy in front
//!   when exposing the service publicly
//! - Origins, methods and headers are mirrored from the request because the
//!   CORS protocol forbids `*` together with credentials

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Allow any origin, method and header, with credentials.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
