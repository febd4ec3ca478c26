use std::sync::Arc;

use async_trait::async_trait;

use crate::application::bag_item::delete::remove_from_bag;
use crate::domain::bag::services::BagManager;
use crate::domain::bag_item::errors::BagItemError;
use crate::domain::bag_item::model::BagItem;
use crate::domain::bag_item::repository::BagItemRepository;
use crate::domain::bag_item::use_cases::update_quantity::{
    UpdateBagItemQuantityParams, UpdateBagItemQuantityUseCase,
};
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateBagItemQuantityUseCaseImpl {
    pub repository: Arc<dyn BagItemRepository>,
    pub bag_manager: Arc<dyn BagManager>,
    pub product_catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateBagItemQuantityUseCase for UpdateBagItemQuantityUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateBagItemQuantityParams,
    ) -> Result<BagItem, BagItemError> {
        self.logger.info(&format!(
            "Setting quantity of bag item {} to {}",
            params.id, params.quantity
        ));

        let item = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BagItemError::NotFound,
                other => BagItemError::Repository(other),
            })?;

        if params.quantity <= 0 {
            self.logger.info(&format!(
                "Non-positive quantity for bag item {}, removing it",
                item.id
            ));
            return remove_from_bag(self.bag_manager.as_ref(), &item).await;
        }

        let product = self
            .product_catalog
            .get_by_id(item.product.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BagItemError::ProductNotFound,
                other => BagItemError::Repository(other),
            })?;

        let mut bag = self.bag_manager.get_by_id(item.bag_id).await?;
        let updated = bag
            .set_item_quantity(item.id, params.quantity, product)
            .ok_or(BagItemError::NotFound)?;
        self.bag_manager.recalculate_total(&mut bag).await?;

        self.logger.info(&format!(
            "Bag item {} updated to quantity {}",
            updated.id, updated.quantity
        ));
        Ok(updated)
    }
}
