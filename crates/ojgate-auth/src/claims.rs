//! Claim structures carried in the `authToken` credential.
//!
//! - [`Claims`]: a verified identity, only produced by the verifier
//! - [`NewClaims`]: the payload written when issuing a token
//!
//! Wire format of the payload:
//!
//! ```json
//! { "username": "alice", "isAdmin": true, "exp": 1767225600, "iss": "ojgate", "iat": 1767222000 }
//! ```
//!
//! `expiresAt` is accepted as an alias for `exp`, and fractional expiry
//! times are rounded up to whole seconds. A payload without
//! `isAdmin` decodes as a non-admin.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::VerificationError;

/// Verified identity of the caller.
///
/// Fields are private and there is no `Deserialize` impl: the only way to
/// get one is a successful [`crate::verify`] call, and it cannot be changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claims {
    username: String,
    #[serde(rename = "isAdmin")]
    is_admin: bool,
    #[serde(rename = "exp")]
    expires_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    iss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    iat: Option<i64>,
}

impl Claims {
    /// Subject identifier, never empty.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Expiry as Unix seconds.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    pub fn issuer(&self) -> Option<&str> {
        self.iss.as_deref()
    }

    pub fn issued_at(&self) -> Option<i64> {
        self.iat
    }
}

/// Payload shape accepted from the wire. Never leaves this crate.
#[derive(Debug, Deserialize)]
pub(crate) struct RawClaims {
    username: String,
    // absent role flag means non-admin
    #[serde(rename = "isAdmin", default)]
    is_admin: bool,
    // NumericDate may carry a fraction
    #[serde(alias = "expiresAt")]
    exp: f64,
    #[serde(default)]
    iss: Option<String>,
    #[serde(default)]
    iat: Option<i64>,
}

impl RawClaims {
    pub(crate) fn into_claims(self) -> Result<Claims, VerificationError> {
        if self.username.is_empty() {
            return Err(VerificationError::Malformed("empty username".to_string()));
        }

        if !self.exp.is_finite() {
            return Err(VerificationError::Malformed("non-finite expiry".to_string()));
        }

        // Rounding up keeps `expires_at > now` exact for whole-second clocks.
        Ok(Claims {
            username: self.username,
            is_admin: self.is_admin,
            expires_at: self.exp.ceil() as i64,
            iss: self.iss,
            iat: self.iat,
        })
    }
}

/// Claims to sign into a new token.
#[derive(Debug, Clone, Serialize)]
pub struct NewClaims {
    pub username: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl NewClaims {
    /// Claims issued now and expiring `ttl_secs` seconds from now.
    pub fn new(username: impl Into<String>, is_admin: bool, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            username: username.into(),
            is_admin,
            exp: now + ttl_secs,
            iss: None,
            iat: Some(now),
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.iss = Some(issuer.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_is_admin_defaults_to_false() {
        let json = r#"{"username":"bob","exp":9999999999}"#;
        let raw: RawClaims = serde_json::from_str(json).unwrap();
        let claims = raw.into_claims().unwrap();

        assert_eq!(claims.username(), "bob");
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_expires_at_alias() {
        let json = r#"{"username":"bob","isAdmin":true,"expiresAt":1234}"#;
        let raw: RawClaims = serde_json::from_str(json).unwrap();
        let claims = raw.into_claims().unwrap();

        assert_eq!(claims.expires_at(), 1234);
        assert!(claims.is_admin());
    }

    #[test]
    fn test_fractional_expiry_rounds_up() {
        let json = r#"{"username":"bob","exp":1234.5}"#;
        let claims = serde_json::from_str::<RawClaims>(json)
            .unwrap()
            .into_claims()
            .unwrap();

        assert_eq!(claims.expires_at(), 1235);
    }

    #[test]
    fn test_missing_expiry_is_rejected() {
        let json = r#"{"username":"bob","isAdmin":true}"#;
        assert!(serde_json::from_str::<RawClaims>(json).is_err());
    }

    #[test]
    fn test_empty_username_is_malformed() {
        let json = r#"{"username":"","exp":9999999999}"#;
        let raw: RawClaims = serde_json::from_str(json).unwrap();

        assert!(matches!(
            raw.into_claims(),
            Err(VerificationError::Malformed(_))
        ));
    }

    #[test]
    fn test_registered_fields_pass_through() {
        let json = r#"{"username":"bob","exp":50,"iss":"ojgate","iat":10}"#;
        let claims = serde_json::from_str::<RawClaims>(json)
            .unwrap()
            .into_claims()
            .unwrap();

        assert_eq!(claims.issuer(), Some("ojgate"));
        assert_eq!(claims.issued_at(), Some(10));
    }

    #[test]
    fn test_new_claims_serialize() {
        let claims = NewClaims {
            username: "alice".to_string(),
            is_admin: true,
            exp: 100,
            iss: None,
            iat: None,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert_eq!(serialized, r#"{"username":"alice","isAdmin":true,"exp":100}"#);
    }

    #[test]
    fn test_new_claims_expiry_after_issue() {
        let claims = NewClaims::new("alice", false, 3600).with_issuer("ojgate");
        assert_eq!(claims.exp - claims.iat.unwrap(), 3600);
        assert_eq!(claims.iss.as_deref(), Some("ojgate"));
    }
}
