//! # ojgate Core
//!
//! Foundational types shared by every ojgate crate.
//!
//! - [`errors`]: the HTTP-facing [`AppError`] and its JSON rejection body
//!
//! # Example
//!
//! ```ignore
//! use ojgate_core::AppError;
//!
//! let error = AppError::not_found("Problem not found.");
//! ```

pub mod errors;

pub use errors::AppError;
