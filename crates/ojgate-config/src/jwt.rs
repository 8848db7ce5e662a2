//! JWT signing configuration.
//!
//! The signing secret is read from `JWT_SECRET_KEY`. A missing, empty, or
//! oversized secret is not an error here: the config is still built, but
//! [`SigningSecret::is_configured`] reports `false` and every verification
//! fails closed.
//!
//! - `JWT_SECRET_KEY`: HMAC secret (no default)
//! - `JWT_ACCESS_EXPIRY`: lifetime in seconds of tokens issued by the CLI (default: 3600)
//! - `JWT_ISSUER`: optional `iss` stamped on issued tokens

use std::env;
use std::fmt;
use std::sync::Arc;

use tracing::error;

/// Upper bound on the secret length in bytes.
pub const MAX_SECRET_LEN: usize = 4096;

/// HMAC signing secret.
///
/// Cheap to clone; the bytes are shared. `Debug` never prints the bytes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SigningSecret(Arc<[u8]>);

impl SigningSecret {
    /// Wrap raw bytes. Secrets longer than [`MAX_SECRET_LEN`] are dropped
    /// and the result is unconfigured.
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        let bytes = bytes.as_ref();
        if bytes.len() > MAX_SECRET_LEN {
            return Self::default();
        }
        Self(Arc::from(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_configured(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_configured() {
            f.write_str("SigningSecret(<redacted>)")
        } else {
            f.write_str("SigningSecret(<unset>)")
        }
    }
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: SigningSecret,
    pub access_token_expiry: i64,
    pub issuer: Option<String>,
}

impl JwtConfig {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: SigningSecret::new(secret),
            access_token_expiry: 3600,
            issuer: None,
        }
    }

    pub fn from_env() -> Self {
        let raw = env::var("JWT_SECRET_KEY").unwrap_or_default();
        if raw.is_empty() {
            error!("CRITICAL: JWT_SECRET_KEY is not set; all authenticated routes will reject requests");
        } else if raw.len() > MAX_SECRET_LEN {
            error!(
                max_len = MAX_SECRET_LEN,
                "CRITICAL: JWT_SECRET_KEY exceeds the maximum length; all authenticated routes will reject requests"
            );
        }

        Self {
            secret: SigningSecret::new(raw),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
            issuer: env::var("JWT_ISSUER").ok().filter(|s| !s.is_empty()),
        }
    }
}
