use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bag::services::BagManager;
use crate::domain::bag_item::errors::BagItemError;
use crate::domain::bag_item::model::BagItem;
use crate::domain::bag_item::repository::BagItemRepository;
use crate::domain::bag_item::use_cases::delete::{DeleteBagItemParams, DeleteBagItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteBagItemUseCaseImpl {
    pub repository: Arc<dyn BagItemRepository>,
    pub bag_manager: Arc<dyn BagManager>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteBagItemUseCase for DeleteBagItemUseCaseImpl {
    async fn execute(&self, params: DeleteBagItemParams) -> Result<BagItem, BagItemError> {
        self.logger
            .info(&format!("Deleting bag item: {}", params.id));

        let item = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BagItemError::NotFound,
                other => BagItemError::Repository(other),
            })?;

        let removed = remove_from_bag(self.bag_manager.as_ref(), &item).await?;

        self.logger.info(&format!(
            "Bag item {} removed from bag {}",
            removed.id, removed.bag_id
        ));
        Ok(removed)
    }
}

/// Takes an already loaded item out of its bag and persists the bag.
/// Returns the item as it was just before removal.
pub(crate) async fn remove_from_bag(
    bag_manager: &dyn BagManager,
    item: &BagItem,
) -> Result<BagItem, BagItemError> {
    let mut bag = bag_manager.get_by_id(item.bag_id).await?;
    let removed = bag.remove_item(item.id).ok_or(BagItemError::NotFound)?;
    bag_manager.recalculate_total(&mut bag).await?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bag::model::Bag;
    use crate::test_support::{MockBagItemRepo, MockBagMgr, mock_logger, money, product, user};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_snapshot_of_removed_item_and_recalculate() {
        let mut bag = Bag::new(&user("alice"));
        let scarf = bag.add_product(product("Scarf", "10.00"), 2).unwrap();
        bag.add_product(product("Hat", "5.00"), 1);
        let scarf_id = scarf.id;

        let mut mock_repo = MockBagItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(scarf.clone()));
        let mut mock_manager = MockBagMgr::new();
        mock_manager
            .expect_get_by_id()
            .returning(move |_| Ok(bag.clone()));
        mock_manager
            .expect_recalculate_total()
            .times(1)
            .returning(move |bag| {
                bag.recalculate_total();
                assert_eq!(bag.total_price(), &money("5.00"));
                assert_eq!(bag.total_items(), 1);
                assert_eq!(bag.removed_item_ids(), &[scarf_id]);
                Ok(())
            });

        let use_case = DeleteBagItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            bag_manager: Arc::new(mock_manager),
            logger: mock_logger(),
        };

        let removed = use_case
            .execute(DeleteBagItemParams { id: scarf_id })
            .await
            .unwrap();

        assert_eq!(removed.id, scarf_id);
        assert_eq!(removed.quantity, 2);
        assert_eq!(removed.total_price, money("20.00"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut mock_repo = MockBagItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut mock_manager = MockBagMgr::new();
        mock_manager.expect_recalculate_total().never();

        let use_case = DeleteBagItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            bag_manager: Arc::new(mock_manager),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteBagItemParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), BagItemError::NotFound));
    }
}
