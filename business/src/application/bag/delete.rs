use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bag::errors::BagError;
use crate::domain::bag::repository::BagRepository;
use crate::domain::bag::use_cases::delete::{
    BAG_DELETED_MESSAGE, DeleteBagParams, DeleteBagUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteBagUseCaseImpl {
    pub repository: Arc<dyn BagRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteBagUseCase for DeleteBagUseCaseImpl {
    async fn execute(&self, params: DeleteBagParams) -> Result<String, BagError> {
        self.logger.info(&format!("Deleting bag: {}", params.id));

        // Verify it exists
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BagError::NotFound,
                other => BagError::Repository(other),
            })?;

        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Bag deleted: {}", params.id));
        Ok(BAG_DELETED_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bag::model::Bag;
    use crate::test_support::{MockBagRepo, mock_logger, user};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_existing_bag() {
        let bag = Bag::new(&user("alice"));
        let bag_id = bag.id;

        let mut mock_repo = MockBagRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(bag.clone()));
        mock_repo
            .expect_delete()
            .times(1)
            .withf(move |id| *id == bag_id)
            .returning(|_| Ok(()));

        let use_case = DeleteBagUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteBagParams { id: bag_id }).await;

        assert_eq!(result.unwrap(), "My Bag deleted successfully.");
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut mock_repo = MockBagRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteBagUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteBagParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), BagError::NotFound));
    }
}
