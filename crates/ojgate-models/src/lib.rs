//! # ojgate Models
//!
//! Domain models and DTOs for the ojgate API.
//!
//! - [`problems`]: problems, their sample test cases, and the create request

pub mod problems;

pub use problems::{CreateProblemDto, Problem, ProblemDetail, ProblemListItem, TestCase};
