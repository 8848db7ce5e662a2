//! # ojgate Auth
//!
//! Credential verification for the ojgate API.
//!
//! This crate provides:
//!
//! - [`claims`]: the verified identity payload ([`Claims`]) and the
//!   payload used when issuing tokens ([`NewClaims`])
//! - [`jwt`]: the HS256 verifier and token issuing
//! - [`error`]: the typed [`VerificationError`]
//!
//! A [`Claims`] value can only be obtained from [`verify`] or [`verify_at`];
//! nothing else in the workspace can build or change one.
//!
//! # Example
//!
//! ```ignore
//! use ojgate_auth::{NewClaims, create_token, verify};
//! use ojgate_config::JwtConfig;
//!
//! let config = JwtConfig::new("s3cr3t");
//! let token = create_token(&NewClaims::new("alice", true, 3600), &config)?;
//!
//! let claims = verify(&token, &config.secret)?;
//! assert_eq!(claims.username(), "alice");
//! ```

pub mod claims;
pub mod error;
pub mod jwt;

pub use claims::{Claims, NewClaims};
pub use error::VerificationError;
pub use jwt::{ALLOWED_ALGORITHM, create_token, verify, verify_at};
