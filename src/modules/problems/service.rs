use chrono::Utc;
use tracing::{error, instrument, warn};
use uuid::Uuid;

use ojgate_core::AppError;
use ojgate_models::{CreateProblemDto, Problem, ProblemDetail, ProblemListItem};

use super::store::{ProblemStore, StoreError};

/// Number of sample test cases returned with a single problem.
pub const SAMPLE_TEST_CASE_LIMIT: usize = 2;

pub struct ProblemService;

impl ProblemService {
    #[instrument(skip(store))]
    pub async fn list_problems(store: &dyn ProblemStore) -> Result<Vec<ProblemListItem>, AppError> {
        let problems = store.list().await.map_err(|e| {
            error!(error = %e, "Error fetching problems");
            AppError::internal_error("Failed to retrieve problems.")
        })?;

        Ok(problems.iter().map(ProblemListItem::from).collect())
    }

    /// Looks up by slug first, then by UUID.
    #[instrument(skip(store))]
    pub async fn get_problem(store: &dyn ProblemStore, key: &str) -> Result<ProblemDetail, AppError> {
        let fetch_failed = |e: StoreError| {
            error!(error = %e, key = %key, "Error fetching problem");
            AppError::internal_error("Failed to retrieve problem.")
        };

        let mut problem = store.find_by_slug(key).await.map_err(fetch_failed)?;
        if problem.is_none()
            && let Ok(id) = Uuid::parse_str(key)
        {
            problem = store.find_by_id(id).await.map_err(fetch_failed)?;
        }

        let problem = problem.ok_or_else(|| AppError::not_found("Problem not found."))?;

        // Samples are best effort.
        let sample_test_cases = store
            .sample_test_cases(problem.id, SAMPLE_TEST_CASE_LIMIT)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, problem_id = %problem.id, "Error fetching sample test cases");
                Vec::new()
            });

        Ok(ProblemDetail {
            problem,
            sample_test_cases,
        })
    }

    #[instrument(skip(store, dto), fields(title = %dto.title))]
    pub async fn create_problem(
        store: &dyn ProblemStore,
        author: &str,
        dto: CreateProblemDto,
    ) -> Result<Problem, AppError> {
        let now = Utc::now();
        let problem_id = match dto.problem_id.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => slugify(&dto.title),
        };

        let problem = Problem {
            id: Uuid::new_v4(),
            problem_id,
            title: dto.title,
            statement: dto.statement,
            difficulty: dto.difficulty,
            tags: dto.tags,
            input_format: dto.input_format,
            output_format: dto.output_format,
            constraints: dto.constraints,
            author: author.to_string(),
            created_at: now,
            updated_at: now,
        };

        store.insert(problem).await.map_err(|e| match e {
            StoreError::DuplicateSlug(_) => AppError::conflict(e.to_string()),
            _ => {
                error!(error = %e, "Failed to create problem");
                AppError::internal_error("Failed to create problem.")
            }
        })
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes.
///
/// Falls back to a random id when the title has no usable characters.
pub fn slugify(title: &str) -> String {
    let slug = title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        Uuid::new_v4().simple().to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::problems::store::InMemoryProblemStore;
    use axum::http::StatusCode;

    fn dto(title: &str, problem_id: Option<&str>) -> CreateProblemDto {
        CreateProblemDto {
            problem_id: problem_id.map(str::to_string),
            title: title.to_string(),
            statement: "Add two numbers.".to_string(),
            difficulty: "easy".to_string(),
            tags: vec!["math".to_string()],
            input_format: None,
            output_format: None,
            constraints: None,
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Two Sum"), "two-sum");
        assert_eq!(slugify("  A+B  Problem!! "), "a-b-problem");
        assert_eq!(slugify("Ünïcode 2"), "n-code-2");
        assert_eq!(slugify("???").len(), 32);
    }

    #[tokio::test]
    async fn test_create_stamps_author_and_slug() {
        let store = InMemoryProblemStore::new();
        let problem = ProblemService::create_problem(&store, "alice", dto("Two Sum", None))
            .await
            .unwrap();

        assert_eq!(problem.author, "alice");
        assert_eq!(problem.problem_id, "two-sum");
        assert_eq!(problem.created_at, problem.updated_at);
    }

    #[tokio::test]
    async fn test_create_keeps_given_slug() {
        let store = InMemoryProblemStore::new();
        let problem =
            ProblemService::create_problem(&store, "alice", dto("Two Sum", Some("p-1001")))
                .await
                .unwrap();

        assert_eq!(problem.problem_id, "p-1001");
    }

    #[tokio::test]
    async fn test_create_duplicate_slug_conflicts() {
        let store = InMemoryProblemStore::new();
        ProblemService::create_problem(&store, "alice", dto("Two Sum", None))
            .await
            .unwrap();

        let err = ProblemService::create_problem(&store, "alice", dto("Two Sum", None))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_get_problem_by_slug_or_id() {
        let store = InMemoryProblemStore::new();
        let created = ProblemService::create_problem(&store, "alice", dto("Two Sum", None))
            .await
            .unwrap();

        let by_slug = ProblemService::get_problem(&store, "two-sum").await.unwrap();
        let by_id = ProblemService::get_problem(&store, &created.id.to_string())
            .await
            .unwrap();

        assert_eq!(by_slug.problem, created);
        assert_eq!(by_id.problem, created);
        assert!(by_slug.sample_test_cases.is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_problem_is_not_found() {
        let store = InMemoryProblemStore::new();
        let unknown_id = Uuid::new_v4().to_string();

        for key in ["missing", unknown_id.as_str()] {
            let err = ProblemService::get_problem(&store, key).await.unwrap_err();
            assert_eq!(err.status, StatusCode::NOT_FOUND);
            assert_eq!(err.error.to_string(), "Problem not found.");
        }
    }
}
