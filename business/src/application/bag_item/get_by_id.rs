use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bag_item::errors::BagItemError;
use crate::domain::bag_item::model::BagItem;
use crate::domain::bag_item::repository::BagItemRepository;
use crate::domain::bag_item::use_cases::get_by_id::{GetBagItemByIdParams, GetBagItemByIdUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetBagItemByIdUseCaseImpl {
    pub repository: Arc<dyn BagItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBagItemByIdUseCase for GetBagItemByIdUseCaseImpl {
    async fn execute(&self, params: GetBagItemByIdParams) -> Result<BagItem, BagItemError> {
        self.logger
            .info(&format!("Fetching bag item by id: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BagItemError::NotFound,
                other => BagItemError::Repository(other),
            })
    }
}
