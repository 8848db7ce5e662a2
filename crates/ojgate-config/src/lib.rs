//! # ojgate Config
//!
//! Configuration types for the ojgate API, loaded once from environment
//! variables at process start and read-only afterwards:
//!
//! - [`jwt`]: signing secret and token settings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: bind address
//!
//! # Example
//!
//! ```ignore
//! use ojgate_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::{JwtConfig, MAX_SECRET_LEN, SigningSecret};
pub use server::ServerConfig;
