//! # ojgate
//!
//! Cookie-authenticated HTTP API for an online judge's problem catalogue.
//!
//! Every protected route runs the same gate: the `authToken` cookie is read,
//! verified as an HS256 JWT against `JWT_SECRET_KEY`, and, for admin routes,
//! checked for `isAdmin`. Rejections are JSON bodies of the form
//! `{"error": "..."}`.
//!
//! ## Routes
//!
//! | Method | Path | Access |
//! |--------|------|--------|
//! | GET | `/problems` | public |
//! | GET | `/problems/{id}` | any authenticated user |
//! | POST | `/problems/create` | admin |
//!
//! ## Layout
//!
//! ```text
//! crates/
//! ├── ojgate-core/     # AppError
//! ├── ojgate-config/   # JWT, CORS and server configuration
//! ├── ojgate-auth/     # claims, verification, token issuing
//! └── ojgate-models/   # problem models and DTOs
//! src/
//! ├── middleware/      # auth gate and CORS
//! ├── modules/         # feature modules (problems)
//! ├── logging.rs       # request logging and subscriber setup
//! ├── router.rs        # route and layer assembly
//! └── state.rs         # shared application state
//! ```
//!
//! ## Environment
//!
//! ```bash
//! JWT_SECRET_KEY=change-me
//! ALLOWED_ORIGINS=http://localhost:3000
//! SERVER_PORT=8080
//! ```
//!
//! A token for local testing can be printed with
//! `cargo run --bin ojgate-cli -- issue-token --username alice --admin`.

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

pub use ojgate_auth;
pub use ojgate_config;
pub use ojgate_core;
pub use ojgate_models;
