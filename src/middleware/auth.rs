//! Cookie-based authentication and role gating.
//!
//! One middleware, [`require_auth`], covers both protected route kinds. Its
//! state, [`RequireAuth`], carries the signing secret and the minimum role:
//!
//! - [`MinRole::User`]: any caller with a valid credential is forwarded, and
//!   the request is passed on unchanged.
//! - [`MinRole::Admin`]: the credential must also carry `isAdmin = true`; the
//!   verified [`Claims`] are then attached to the request for the handler.
//!
//! Handlers read attached claims through [`CurrentClaims`] or
//! [`claims_from_extensions`]; they never parse the cookie themselves.
//!
//! ```text
//! cookie lookup ── absent ────────────────▶ 401
//!      │        └─ unreadable ────────────▶ 400
//!      ▼
//!   verify ────── any VerificationError ──▶ 401
//!      │
//!      ▼
//! role check ──── not admin (Admin only) ─▶ 403
//!      │
//!      ▼
//!   forward
//! ```

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts, Request, State},
    http::{HeaderMap, StatusCode, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::Cookie;
use tracing::{debug, error, warn};

use ojgate_auth::{Claims, VerificationError, verify};
use ojgate_config::{JwtConfig, SigningSecret};
use ojgate_core::AppError;

/// Name of the cookie carrying the credential.
pub const AUTH_COOKIE_NAME: &str = "authToken";

/// Minimum privilege a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinRole {
    User,
    Admin,
}

/// Middleware state for [`require_auth`].
#[derive(Debug, Clone)]
pub struct RequireAuth {
    secret: SigningSecret,
    min_role: MinRole,
}

impl RequireAuth {
    pub fn new(jwt_config: &JwtConfig, min_role: MinRole) -> Self {
        Self {
            secret: jwt_config.secret.clone(),
            min_role,
        }
    }

    pub fn user(jwt_config: &JwtConfig) -> Self {
        Self::new(jwt_config, MinRole::User)
    }

    pub fn admin(jwt_config: &JwtConfig) -> Self {
        Self::new(jwt_config, MinRole::Admin)
    }

}

/// Why a request was stopped before reaching its handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    #[error("cookie header could not be read")]
    Transport,

    #[error("no authToken cookie")]
    MissingCredential,

    #[error("credential rejected: {0}")]
    InvalidCredential(VerificationError),

    #[error("user {username} is not an admin")]
    InsufficientRole { username: String },
}

impl AuthFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthFailure::Transport => StatusCode::BAD_REQUEST,
            AuthFailure::MissingCredential | AuthFailure::InvalidCredential(_) => {
                StatusCode::UNAUTHORIZED
            }
            AuthFailure::InsufficientRole { .. } => StatusCode::FORBIDDEN,
        }
    }

    /// Caller-facing text. Verification details are never included.
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthFailure::Transport => "Error reading authentication token.",
            AuthFailure::MissingCredential => "Authentication required. Please log in.",
            AuthFailure::InvalidCredential(_) => "Invalid or expired authentication token.",
            AuthFailure::InsufficientRole { .. } => "Access denied. Admin privileges required.",
        }
    }
}

impl IntoResponse for AuthFailure {
    fn into_response(self) -> Response {
        let message = self.public_message();
        match self {
            AuthFailure::Transport => AppError::bad_request(message),
            AuthFailure::MissingCredential | AuthFailure::InvalidCredential(_) => {
                AppError::unauthorized(message)
            }
            AuthFailure::InsufficientRole { .. } => AppError::forbidden(message),
        }
        .into_response()
    }
}

/// Reads the credential from the `authToken` cookie.
///
/// A `Cookie` header that is not visible ASCII is a transport failure.
/// Unparseable cookie pairs are skipped; the first `authToken` wins. One
/// pair of surrounding double quotes is stripped from the value.
pub fn extract_auth_cookie(headers: &HeaderMap) -> Result<String, AuthFailure> {
    for value in headers.get_all(header::COOKIE) {
        let raw = value.to_str().map_err(|_| AuthFailure::Transport)?;

        let token = Cookie::split_parse(raw)
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == AUTH_COOKIE_NAME)
            .map(|cookie| cookie.value_trimmed().to_string());

        if let Some(token) = token {
            return Ok(token);
        }
    }

    Err(AuthFailure::MissingCredential)
}

/// Runs cookie lookup, verification and the role check for one request.
pub fn authorize(
    headers: &HeaderMap,
    secret: &SigningSecret,
    min_role: MinRole,
) -> Result<Claims, AuthFailure> {
    let token = extract_auth_cookie(headers)?;

    let claims = verify(&token, secret).map_err(AuthFailure::InvalidCredential)?;

    if min_role == MinRole::Admin && !claims.is_admin() {
        return Err(AuthFailure::InsufficientRole {
            username: claims.username().to_string(),
        });
    }

    Ok(claims)
}

/// Request-scoped holder for verified claims. Private so that only this
/// module can insert it.
#[derive(Clone)]
struct VerifiedClaims(Arc<Claims>);

/// Claims attached by an admin-gated [`require_auth`], if any.
pub fn claims_from_extensions(extensions: &axum::http::Extensions) -> Option<&Claims> {
    extensions.get::<VerifiedClaims>().map(|verified| verified.0.as_ref())
}

/// Authentication/authorization middleware.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// use axum::{Router, middleware, routing::post};
/// use crate::middleware::auth::{RequireAuth, require_auth};
///
/// let admin_routes = Router::new()
///     .route("/problems/create", post(create_problem))
///     .route_layer(middleware::from_fn_with_state(
///         RequireAuth::admin(&state.jwt_config),
///         require_auth,
///     ));
/// ```
pub async fn require_auth(
    State(gate): State<RequireAuth>,
    mut req: Request,
    next: Next,
) -> Response {
    match authorize(req.headers(), &gate.secret, gate.min_role) {
        Ok(claims) => {
            debug!(username = %claims.username(), min_role = ?gate.min_role, "Request authorized");
            if gate.min_role == MinRole::Admin {
                req.extensions_mut()
                    .insert(VerifiedClaims(Arc::new(claims)));
            }
            next.run(req).await
        }
        Err(failure) => {
            log_failure(&failure, req.uri().path());
            failure.into_response()
        }
    }
}

fn log_failure(failure: &AuthFailure, path: &str) {
    let status = failure.status().as_u16();
    match failure {
        AuthFailure::InvalidCredential(VerificationError::ConfigError) => {
            error!(path = %path, status, "CRITICAL: signing secret is not configured; rejecting request");
        }
        AuthFailure::InvalidCredential(err) => {
            warn!(path = %path, status, kind = err.kind(), error = %err, "Credential verification failed");
        }
        AuthFailure::Transport => {
            warn!(path = %path, status, "Error reading auth token cookie");
        }
        AuthFailure::MissingCredential => {
            debug!(path = %path, status, "No auth token cookie provided");
        }
        AuthFailure::InsufficientRole { username } => {
            warn!(path = %path, status, username = %username, "Admin privileges required");
        }
    }
}

/// Extractor for the claims attached by an admin-gated route.
///
/// Rejects with 500 when the route was not wrapped by
/// `require_auth` with [`MinRole::Admin`].
#[derive(Debug, Clone)]
pub struct CurrentClaims(pub Claims);

impl<S> FromRequestParts<S> for CurrentClaims
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        claims_from_extensions(&parts.extensions)
            .cloned()
            .map(CurrentClaims)
            .ok_or_else(|| {
                error!("Claims missing from request context on a protected handler");
                AppError::internal_error("Failed to retrieve user information.")
            })
    }
}

/// For handlers that serve both gated and ungated routes.
impl<S> OptionalFromRequestParts<S> for CurrentClaims
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(claims_from_extensions(&parts.extensions)
            .cloned()
            .map(CurrentClaims))
    }
}
