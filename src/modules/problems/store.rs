use std::fmt::Debug;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use ojgate_models::{Problem, TestCase};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a problem with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("problem {0} does not exist")]
    UnknownProblem(Uuid),
}

/// Persistence for problems and their test cases.
#[async_trait]
pub trait ProblemStore: Send + Sync + Debug {
    async fn list(&self) -> Result<Vec<Problem>, StoreError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Problem>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Problem>, StoreError>;

    /// The first `limit` test cases of `problem_id`, ordered by sequence number.
    async fn sample_test_cases(
        &self,
        problem_id: Uuid,
        limit: usize,
    ) -> Result<Vec<TestCase>, StoreError>;

    async fn insert(&self, problem: Problem) -> Result<Problem, StoreError>;

    async fn insert_test_case(&self, test_case: TestCase) -> Result<TestCase, StoreError>;
}

/// Process-local store. Listing returns problems in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryProblemStore {
    problems: RwLock<Vec<Problem>>,
    test_cases: RwLock<Vec<TestCase>>,
}

impl InMemoryProblemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProblemStore for InMemoryProblemStore {
    async fn list(&self) -> Result<Vec<Problem>, StoreError> {
        Ok(self.problems.read().await.clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Problem>, StoreError> {
        let problems = self.problems.read().await;
        Ok(problems.iter().find(|p| p.problem_id == slug).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Problem>, StoreError> {
        let problems = self.problems.read().await;
        Ok(problems.iter().find(|p| p.id == id).cloned())
    }

    async fn sample_test_cases(
        &self,
        problem_id: Uuid,
        limit: usize,
    ) -> Result<Vec<TestCase>, StoreError> {
        let test_cases = self.test_cases.read().await;
        let mut samples: Vec<TestCase> = test_cases
            .iter()
            .filter(|tc| tc.problem_db_id == problem_id)
            .cloned()
            .collect();
        samples.sort_by_key(|tc| tc.sequence_number);
        samples.truncate(limit);
        Ok(samples)
    }

    async fn insert(&self, problem: Problem) -> Result<Problem, StoreError> {
        let mut problems = self.problems.write().await;
        if problems.iter().any(|p| p.problem_id == problem.problem_id) {
            return Err(StoreError::DuplicateSlug(problem.problem_id));
        }
        problems.push(problem.clone());
        Ok(problem)
    }

    async fn insert_test_case(&self, test_case: TestCase) -> Result<TestCase, StoreError> {
        if !self
            .problems
            .read()
            .await
            .iter()
            .any(|p| p.id == test_case.problem_db_id)
        {
            return Err(StoreError::UnknownProblem(test_case.problem_db_id));
        }

        self.test_cases.write().await.push(test_case.clone());
        Ok(test_case)
    }
}
