//! HS256 credential verification and issuing.
//!
//! [`verify_at`] runs these checks in order and stops at the first failure:
//!
//! 1. a signing secret is configured ([`VerificationError::ConfigError`])
//! 2. the token has three segments and a decodable header with a string
//!    `alg` ([`VerificationError::Malformed`])
//! 3. `alg` is exactly `HS256`; `none` and every other algorithm are refused
//!    ([`VerificationError::BadAlgorithm`])
//! 4. the HMAC-SHA256 signature over `header.payload` matches
//!    ([`VerificationError::BadSignature`])
//! 5. the payload decodes into claims with a non-empty username
//!    ([`VerificationError::Malformed`])
//! 6. the expiry is strictly after `now` ([`VerificationError::Expired`])
//!
//! Verification has no side effects; the same token, secret and clock always
//! give the same result.

use chrono::Utc;
use data_encoding::BASE64URL_NOPAD;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Deserialize;

use ojgate_config::{JwtConfig, SigningSecret};

use crate::claims::{Claims, NewClaims, RawClaims};
use crate::error::VerificationError;

/// The only algorithm accepted or produced.
pub const ALLOWED_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Deserialize)]
struct JoseHeader {
    alg: String,
}

/// Verifies `token` against `secret` using the current time.
pub fn verify(token: &str, secret: &SigningSecret) -> Result<Claims, VerificationError> {
    verify_at(token, secret, Utc::now().timestamp())
}

/// Verifies `token` against `secret` as of `now` (Unix seconds).
pub fn verify_at(
    token: &str,
    secret: &SigningSecret,
    now: i64,
) -> Result<Claims, VerificationError> {
    if !secret.is_configured() {
        return Err(VerificationError::ConfigError);
    }

    let header = parse_header(token)?;
    if header.alg != "HS256" {
        return Err(VerificationError::BadAlgorithm(header.alg));
    }

    // Expiry is checked below against the caller's clock, and `exp` may
    // arrive under its alias, so the library only checks the signature.
    let mut validation = Validation::new(ALLOWED_ALGORITHM);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let raw = decode::<RawClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(map_decode_error)?
    .claims;

    let claims = raw.into_claims()?;

    if claims.expires_at() <= now {
        return Err(VerificationError::Expired);
    }

    Ok(claims)
}

/// Signs `claims` as an HS256 token with the configured secret.
///
/// When `claims` carries no issuer, the configured issuer (if any) is used.
pub fn create_token(claims: &NewClaims, jwt_config: &JwtConfig) -> Result<String, VerificationError> {
    if !jwt_config.secret.is_configured() {
        return Err(VerificationError::ConfigError);
    }

    let mut claims = claims.clone();
    if claims.iss.is_none() {
        claims.iss = jwt_config.issuer.clone();
    }

    encode(
        &Header::new(ALLOWED_ALGORITHM),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| VerificationError::Malformed(format!("failed to encode token: {}", e)))
}

fn parse_header(token: &str) -> Result<JoseHeader, VerificationError> {
    let mut segments = token.split('.');
    let (Some(header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(VerificationError::Malformed(
            "expected three dot-separated segments".to_string(),
        ));
    };

    // An empty signature is left to the signature check.
    if header.is_empty() || payload.is_empty() {
        return Err(VerificationError::Malformed("empty segment".to_string()));
    }

    let bytes = BASE64URL_NOPAD
        .decode(header.as_bytes())
        .map_err(|e| VerificationError::Malformed(format!("header encoding: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| VerificationError::Malformed(format!("header: {}", e)))
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> VerificationError {
    match err.kind() {
        ErrorKind::InvalidSignature => VerificationError::BadSignature,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            VerificationError::BadAlgorithm(err.to_string())
        }
        ErrorKind::ExpiredSignature => VerificationError::Expired,
        _ => VerificationError::Malformed(err.to_string()),
    }
}
