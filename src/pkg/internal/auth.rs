use axum::http::HeaderMap;

use crate::{errors::Error, prelude::Result};

pub const USER_ID_HEADER: &str = "x-user-id";

/// The opaque caller identity. Any non-empty header value is trusted as-is;
/// the trust boundary is external to this service.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
}

impl Identity {
    pub fn from_headers(headers: &HeaderMap) -> Result<Identity> {
        let user_id = headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .unwrap_or_default();
        if user_id.is_empty() {
            return Err(Error::Unauthorized("missing X-User-Id header".into()));
        }
        Ok(Identity {
            user_id: user_id.to_string(),
        })
    }
}
