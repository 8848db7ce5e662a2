//! Problem catalogue: listing, detail with sample test cases, and creation.

pub mod controller;
pub mod router;
pub mod service;
pub mod store;

pub use ojgate_models::{CreateProblemDto, Problem, ProblemDetail, ProblemListItem, TestCase};
pub use store::{InMemoryProblemStore, ProblemStore, StoreError};
