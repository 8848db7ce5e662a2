//! Request middleware.
//!
//! - [`auth`]: cookie credential verification and role gating
//! - [`cors`]: cross-origin policy, applied outermost
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::auth::{RequireAuth, require_auth};
//!
//! let protected = Router::new()
//!     .route("/problems/{id}", get(get_problem))
//!     .route_layer(middleware::from_fn_with_state(
//!         RequireAuth::user(&state.jwt_config),
//!         require_auth,
//!     ));
//! ```

pub mod auth;
pub mod cors;
