//! Problem domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    pub id: Uuid,
    /// Human-readable slug, unique across problems.
    pub problem_id: String,
    pub title: String,
    pub statement: String,
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub input_format: Option<String>,
    pub output_format: Option<String>,
    pub constraints: Option<String>,
    /// Username of the admin who created the problem.
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Summary row returned by the problem listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProblemListItem {
    pub id: Uuid,
    pub problem_id: String,
    pub title: String,
    pub difficulty: String,
    pub tags: Vec<String>,
}

impl From<&Problem> for ProblemListItem {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id,
            problem_id: problem.problem_id.clone(),
            title: problem.title.clone(),
            difficulty: problem.difficulty.clone(),
            tags: problem.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestCase {
    pub id: Uuid,
    /// `id` of the owning problem.
    pub problem_db_id: Uuid,
    pub sequence_number: i32,
    pub input: String,
    pub expected_output: String,
}

/// A single problem together with its first sample test cases.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProblemDetail {
    #[serde(flatten)]
    pub problem: Problem,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sample_test_cases: Vec<TestCase>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProblemDto {
    /// Optional slug; derived from the title when absent.
    pub problem_id: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "statement is required"))]
    pub statement: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "difficulty is required"))]
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub input_format: Option<String>,
    pub output_format: Option<String>,
    pub constraints: Option<String>,
}
