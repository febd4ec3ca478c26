use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bag::errors::BagError;
use crate::domain::bag::model::Bag;
use crate::domain::bag::repository::BagRepository;
use crate::domain::bag::use_cases::get_all::GetAllBagsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllBagsUseCaseImpl {
    pub repository: Arc<dyn BagRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllBagsUseCase for GetAllBagsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Bag>, BagError> {
        self.logger.info("Getting all bags");
        let bags = self.repository.get_all().await?;
        self.logger.info(&format!("Retrieved {} bags", bags.len()));
        Ok(bags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockBagRepo, mock_logger, user};

    #[tokio::test]
    async fn should_return_all_bags() {
        let mut mock_repo = MockBagRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![Bag::new(&user("alice")), Bag::new(&user("bob"))]));

        let use_case = GetAllBagsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_when_no_bags() {
        let mut mock_repo = MockBagRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllBagsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockBagRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllBagsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            BagError::Repository(_)
        ));
    }
}
