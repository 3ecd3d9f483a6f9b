//! Authenticated identity supplied by the identity provider.

use axum::{
    Json, async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use giotto_core::ErrorResponse;

/// Header carrying the authenticated owner identity.
pub const IDENTITY_HEADER: &str = "x-identity-user";
/// Header flagging a privileged identity.
pub const PRIVILEGE_HEADER: &str = "x-identity-privileged";

/// The caller's identity as asserted by the identity provider.
///
/// The gateway trusts these headers without re-verifying them; the
/// identity provider in front of it owns authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    owner: String,
    privileged: bool,
}

impl Identity {
    /// Wrap an asserted identity.
    pub fn new(owner: impl Into<String>, privileged: bool) -> Self {
        Self {
            owner: owner.into(),
            privileged,
        }
    }

    /// The owner identity records are attributed to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Whether the caller may see other owners' records.
    pub fn privileged(&self) -> bool {
        self.privileged
    }
}

/// Rejection returned when the identity header is absent or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingIdentity;

impl IntoResponse for MissingIdentity {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Authentication required")),
        )
            .into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = MissingIdentity;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let owner = parts
            .headers
            .get(IDENTITY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(MissingIdentity)?;

        let privileged = parts
            .headers
            .get(PRIVILEGE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| matches!(value, "true" | "1"))
            .unwrap_or(false);

        Ok(Identity::new(owner, privileged))
    }
}
