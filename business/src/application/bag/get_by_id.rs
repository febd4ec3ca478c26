use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bag::errors::BagError;
use crate::domain::bag::model::Bag;
use crate::domain::bag::services::BagManager;
use crate::domain::bag::use_cases::get_by_id::{GetBagByIdParams, GetBagByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetBagByIdUseCaseImpl {
    pub bag_manager: Arc<dyn BagManager>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBagByIdUseCase for GetBagByIdUseCaseImpl {
    async fn execute(&self, params: GetBagByIdParams) -> Result<Bag, BagError> {
        self.logger
            .info(&format!("Fetching bag by id: {}", params.id));

        self.bag_manager.get_by_id(params.id).await
    }
}
