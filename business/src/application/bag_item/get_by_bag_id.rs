use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bag_item::errors::BagItemError;
use crate::domain::bag_item::model::BagItem;
use crate::domain::bag_item::repository::BagItemRepository;
use crate::domain::bag_item::use_cases::get_by_bag_id::{
    GetBagItemsByBagIdParams, GetBagItemsByBagIdUseCase,
};
use crate::domain::logger::Logger;

pub struct GetBagItemsByBagIdUseCaseImpl {
    pub repository: Arc<dyn BagItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBagItemsByBagIdUseCase for GetBagItemsByBagIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetBagItemsByBagIdParams,
    ) -> Result<Vec<BagItem>, BagItemError> {
        self.logger
            .info(&format!("Getting items of bag: {}", params.bag_id));
        let items = self.repository.get_by_bag_id(params.bag_id).await?;
        self.logger
            .info(&format!("Retrieved {} bag items", items.len()));
        Ok(items)
    }
}
