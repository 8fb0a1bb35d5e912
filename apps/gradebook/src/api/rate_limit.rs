//! Global request rate limiting.
//!
//! One direct (unkeyed) limiter shared by every route. Requests beyond the
//! quota are answered with `429 Too Many Requests` before reaching a handler.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::warn;

pub type SharedRateLimiter = Arc<DefaultDirectRateLimiter>;

/// A limiter allowing `per_second` requests, with a burst of the same size.
pub fn limiter(per_second: NonZeroU32) -> SharedRateLimiter {
    Arc::new(RateLimiter::direct(Quota::per_second(per_second)))
}

pub async fn enforce(
    State(limiter): State<SharedRateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    if limiter.check().is_err() {
        warn!(path = %request.uri().path(), "rate limit exceeded");
        return (StatusCode::TOO_MANY_REQUESTS, "rate limit exceeded").into_response();
    }
    next.run(request).await
}
