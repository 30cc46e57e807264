use std::sync::Arc;

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::{pkg::internal::auth::Identity, prelude::Result};

/// Resolves the caller identity from the request headers and hands it to the
/// handlers as an extension. Runs on every /applications route.
pub async fn identify(headers: HeaderMap, mut request: Request, next: Next) -> Result<Response> {
    let identity = match Identity::from_headers(&headers) {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!("caller identity missing, rejecting request");
            return Err(err);
        }
    };
    request.extensions_mut().insert(Arc::new(identity));
    Ok(next.run(request).await)
}
