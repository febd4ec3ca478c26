use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bag::services::BagManager;
use crate::domain::bag_item::errors::BagItemError;
use crate::domain::bag_item::model::BagItem;
use crate::domain::bag_item::use_cases::add::{AddBagItemParams, AddBagItemUseCase};
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddBagItemUseCaseImpl {
    pub bag_manager: Arc<dyn BagManager>,
    pub product_catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddBagItemUseCase for AddBagItemUseCaseImpl {
    async fn execute(&self, params: AddBagItemParams) -> Result<BagItem, BagItemError> {
        self.logger.info(&format!(
            "Adding {} x product {} to bag of {}",
            params.quantity, params.product_id, params.user_name
        ));

        if params.quantity <= 0 {
            return Err(BagItemError::InvalidQuantity);
        }

        let mut bag = self.bag_manager.get_or_create_bag(&params.user_name).await?;

        let product = self
            .product_catalog
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BagItemError::ProductNotFound,
                other => BagItemError::Repository(other),
            })?;

        let Some(item) = bag.add_product(product, params.quantity) else {
            self.logger.warn(&format!(
                "Quantity overflow adding product {} to bag {}",
                params.product_id, bag.id
            ));
            return Err(BagItemError::InvalidQuantity);
        };
        self.bag_manager.recalculate_total(&mut bag).await?;

        self.logger.info(&format!(
            "Bag item {} now has quantity {}",
            item.id, item.quantity
        ));
        Ok(item)
    }
}
